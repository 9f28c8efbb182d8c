//! API Configuration
//!
//! Base URL and endpoint paths of the recipe backend.

/// Backend used when `RECIPE_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "https://recipe-platform-backend-gguu.onrender.com";

/// Endpoint paths, relative to the base URL
pub mod endpoints {
    pub const RECIPES: &str = "/recipes";
    pub const SEARCH: &str = "/recipes/search";
    pub const UPLOAD_IMAGE: &str = "/upload";

    /// Path of a single recipe resource
    pub fn recipe(id: &crate::RecipeId) -> String {
        format!("{}/{}", RECIPES, id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at compile time, falling back to the default backend
    pub fn from_env() -> Self {
        Self::new(option_env!("RECIPE_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.url(endpoints::RECIPES), "http://localhost:8000/recipes");
        assert_eq!(config.url("upload"), "http://localhost:8000/upload");
    }
}
