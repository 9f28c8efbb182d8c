//! Page Identity & Configuration
//!
//! Each HTML page of the site maps to a `Page`; each page has one
//! `PageConfig` record describing what it loads and which bindings it wires.

use percent_encoding::percent_decode_str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    List,
    Add,
    Edit,
    Detail,
    Search,
    Unrecognized(String),
}

/// Data a page loads when it mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLoad {
    None,
    Recent,
    All,
    RecipeForEdit,
    RecipeDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub load: DataLoad,
    pub form: Option<FormMode>,
    pub image_preview: bool,
    pub field_validation: bool,
    pub category_filters: bool,
    pub debounced_search: bool,
    /// Page is meaningless without `?id=`
    pub requires_id: bool,
}

impl PageConfig {
    const NOTHING: PageConfig = PageConfig {
        load: DataLoad::None,
        form: None,
        image_preview: false,
        field_validation: false,
        category_filters: false,
        debounced_search: false,
        requires_id: false,
    };
}

/// Navigation bar entries: (href, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("all-recipes.html", "All Recipes"),
    ("add-recipe.html", "Add Recipe"),
    ("search.html", "Search"),
];

impl Page {
    /// Identify the page from `location.pathname`
    pub fn from_path(pathname: &str) -> Self {
        match last_segment(pathname) {
            "" | "index.html" => Page::Home,
            "all-recipes.html" => Page::List,
            "add-recipe.html" => Page::Add,
            "edit-recipe.html" => Page::Edit,
            "recipe-detail.html" => Page::Detail,
            "search.html" => Page::Search,
            other => Page::Unrecognized(other.to_string()),
        }
    }

    pub fn config(&self) -> PageConfig {
        match self {
            Page::Home => PageConfig {
                load: DataLoad::Recent,
                ..PageConfig::NOTHING
            },
            Page::List => PageConfig {
                load: DataLoad::All,
                category_filters: true,
                ..PageConfig::NOTHING
            },
            Page::Add => PageConfig {
                form: Some(FormMode::Create),
                image_preview: true,
                field_validation: true,
                ..PageConfig::NOTHING
            },
            Page::Edit => PageConfig {
                load: DataLoad::RecipeForEdit,
                form: Some(FormMode::Edit),
                image_preview: true,
                field_validation: true,
                requires_id: true,
                ..PageConfig::NOTHING
            },
            Page::Detail => PageConfig {
                load: DataLoad::RecipeDetail,
                requires_id: true,
                ..PageConfig::NOTHING
            },
            Page::Search => PageConfig {
                debounced_search: true,
                ..PageConfig::NOTHING
            },
            Page::Unrecognized(_) => PageConfig::NOTHING,
        }
    }
}

fn last_segment(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

/// Whether a nav link points at the current page
pub fn is_active_link(href: &str, pathname: &str) -> bool {
    let current = match last_segment(pathname) {
        "" => "index.html",
        other => other,
    };
    last_segment(href) == current
}

/// Resolve a site-relative link (`recipe-detail.html?id=3`) from the current page.
/// The home page sits at the site root, every other page under `pages/`.
pub fn site_href(pathname: &str, target: &str) -> String {
    let in_pages_dir = pathname.contains("/pages/");
    let is_home = last_segment(target) == "index.html";
    match (in_pages_dir, is_home) {
        (true, true) => format!("../{}", target),
        (false, false) => format!("pages/{}", target),
        _ => target.to_string(),
    }
}

/// Read one parameter from `location.search` (`?id=3&x=y`)
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/pages/all-recipes.html"), Page::List);
        assert_eq!(Page::from_path("/pages/add-recipe.html"), Page::Add);
        assert_eq!(Page::from_path("/pages/edit-recipe.html"), Page::Edit);
        assert_eq!(Page::from_path("/pages/recipe-detail.html"), Page::Detail);
        assert_eq!(Page::from_path("/pages/search.html"), Page::Search);
        assert_eq!(
            Page::from_path("/pages/about.html"),
            Page::Unrecognized("about.html".to_string())
        );
    }

    #[test]
    fn test_page_configs() {
        assert_eq!(Page::Home.config().load, DataLoad::Recent);
        assert!(Page::List.config().category_filters);
        assert_eq!(Page::Add.config().form, Some(FormMode::Create));
        assert!(!Page::Add.config().requires_id);

        let edit = Page::Edit.config();
        assert_eq!(edit.form, Some(FormMode::Edit));
        assert!(edit.requires_id && edit.image_preview && edit.field_validation);

        assert!(Page::Search.config().debounced_search);
        assert_eq!(Page::Unrecognized("x.html".into()).config(), PageConfig::NOTHING);
    }

    #[test]
    fn test_is_active_link() {
        assert!(is_active_link("index.html", "/"));
        assert!(is_active_link("../index.html", "/index.html"));
        assert!(is_active_link("search.html", "/pages/search.html"));
        assert!(!is_active_link("search.html", "/pages/all-recipes.html"));
    }

    #[test]
    fn test_site_href() {
        assert_eq!(site_href("/index.html", "recipe-detail.html?id=3"), "pages/recipe-detail.html?id=3");
        assert_eq!(site_href("/", "search.html"), "pages/search.html");
        assert_eq!(site_href("/pages/search.html", "edit-recipe.html?id=3"), "edit-recipe.html?id=3");
        assert_eq!(site_href("/pages/search.html", "index.html"), "../index.html");
        assert_eq!(site_href("/", "index.html"), "index.html");
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?id=12", "id").as_deref(), Some("12"));
        assert_eq!(query_param("?x=1&id=a%20b", "id").as_deref(), Some("a b"));
        assert_eq!(query_param("?flag&id=", "id").as_deref(), Some(""));
        assert_eq!(query_param("", "id"), None);
    }
}
