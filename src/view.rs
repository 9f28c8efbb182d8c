//! Recipe View Models
//!
//! Pure transforms from recipes to the data a renderer needs. The Leptos
//! components in `components/` bind these; nothing here touches the DOM.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use recipe_api::{Recipe, RecipeId};

/// Shown when a recipe has no image or its image fails to load
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

const NOT_AVAILABLE: &str = "N/A";

/// Link to the detail page of a recipe
pub fn detail_href(id: &RecipeId) -> String {
    format!("recipe-detail.html?id={}", id)
}

/// Link to the edit page of a recipe
pub fn edit_href(id: &RecipeId) -> String {
    format!("edit-recipe.html?id={}", id)
}

/// Split newline-delimited text into trimmed, non-blank lines
pub fn format_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Human date for a backend timestamp; unparseable input is returned as-is
pub fn format_date(timestamp: &str) -> String {
    let raw = timestamp.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Summary card for list, home and search views
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCardView {
    pub id: RecipeId,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub prep_time: String,
    pub servings: String,
    pub category: Option<String>,
    pub detail_href: String,
    pub edit_href: String,
}

impl From<&Recipe> for RecipeCardView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.name.clone(),
            image_url: non_blank(&recipe.image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            description: non_blank(&recipe.description)
                .unwrap_or_else(|| "No description available".to_string()),
            prep_time: format!("{} min", or_na(recipe.prep_time)),
            servings: format!("{} servings", or_na(recipe.servings)),
            category: non_blank(&recipe.category),
            detail_href: detail_href(&recipe.id),
            edit_href: edit_href(&recipe.id),
        }
    }
}

/// A list section built from newline-delimited text
#[derive(Debug, Clone, PartialEq)]
pub struct TextList {
    pub ordered: bool,
    pub items: Vec<String>,
    /// Message shown instead of the list when there are no items
    pub empty_message: &'static str,
}

impl TextList {
    pub fn ingredients(text: &str) -> Self {
        Self {
            ordered: false,
            items: format_lines(text),
            empty_message: "No ingredients specified",
        }
    }

    pub fn instructions(text: &str) -> Self {
        Self {
            ordered: true,
            items: format_lines(text),
            empty_message: "No instructions specified",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaItem {
    pub label: &'static str,
    pub value: String,
}

/// Full recipe page
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetailView {
    pub id: RecipeId,
    pub title: String,
    pub image_url: Option<String>,
    pub meta: Vec<MetaItem>,
    pub description: Option<String>,
    pub ingredients: TextList,
    pub instructions: TextList,
    pub tags: Option<String>,
    pub created: Option<String>,
    /// Only present when the recipe was modified after creation
    pub updated: Option<String>,
    pub edit_href: String,
}

impl From<&Recipe> for RecipeDetailView {
    fn from(recipe: &Recipe) -> Self {
        let meta = vec![
            MetaItem {
                label: "Prep time",
                value: format!("{} min", or_na(recipe.prep_time)),
            },
            MetaItem {
                label: "Cook time",
                value: format!("{} min", or_na(recipe.cook_time)),
            },
            MetaItem {
                label: "Servings",
                value: or_na(recipe.servings),
            },
            MetaItem {
                label: "Difficulty",
                value: or_na(non_blank(&recipe.difficulty)),
            },
            MetaItem {
                label: "Category",
                value: or_na(non_blank(&recipe.category)),
            },
        ];

        let updated = match (&recipe.created_at, &recipe.updated_at) {
            (created, Some(updated)) if created.as_ref() != Some(updated) => Some(format_date(updated)),
            _ => None,
        };

        Self {
            id: recipe.id.clone(),
            title: recipe.name.clone(),
            image_url: non_blank(&recipe.image_url),
            meta,
            description: non_blank(&recipe.description),
            ingredients: TextList::ingredients(&recipe.ingredients),
            instructions: TextList::instructions(&recipe.instructions),
            tags: non_blank(&recipe.tags),
            created: recipe.created_at.as_deref().map(format_date),
            updated,
            edit_href: edit_href(&recipe.id),
        }
    }
}

// ========================
// Category filters
// ========================

/// Filter value that shows every card
pub const FILTER_ALL: &str = "all";

/// `all` followed by each distinct category, in first-seen order
pub fn category_filters(recipes: &[Recipe]) -> Vec<String> {
    let mut filters = vec![FILTER_ALL.to_string()];
    for category in recipes.iter().filter_map(|r| non_blank(&r.category)) {
        if !filters.contains(&category) {
            filters.push(category);
        }
    }
    filters
}

/// `active` while some recipe still has that category, otherwise `all`
pub fn effective_filter(active: &str, recipes: &[Recipe]) -> String {
    if category_filters(recipes).iter().any(|f| f == active) {
        active.to_string()
    } else {
        FILTER_ALL.to_string()
    }
}

pub fn matches_filter(card: &RecipeCardView, filter: &str) -> bool {
    filter == FILTER_ALL || card.category.as_deref() == Some(filter)
}
