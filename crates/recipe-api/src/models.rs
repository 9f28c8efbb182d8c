//! Wire Models
//!
//! Data structures matching the backend's JSON resources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque recipe identifier assigned by the backend
///
/// The backend may send numbers or strings; both are kept as-is and rendered
/// verbatim into paths and query strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(u64),
    Text(String),
}

impl RecipeId {
    /// Parse an id taken from a URL parameter
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<u64>() {
            Ok(n) => RecipeId::Number(n),
            Err(_) => RecipeId::Text(raw.to_string()),
        })
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

/// Recipe resource (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of create (POST) and full update (PUT) requests
///
/// Absent optional values serialize as `null`, never as zero or "".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub name: String,
    pub description: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

/// Body of partial update (PATCH) requests; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl RecipePatch {
    /// Patch that only attaches an uploaded image
    pub fn image_url(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// An image file selected for upload
#[derive(Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Response of the upload endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub image_url: String,
}

/// Field the backend searches in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Name,
    Ingredients,
    Category,
    Tags,
}

impl SearchType {
    pub const ALL: [SearchType; 4] = [
        SearchType::Name,
        SearchType::Ingredients,
        SearchType::Category,
        SearchType::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Name => "name",
            SearchType::Ingredients => "ingredients",
            SearchType::Category => "category",
            SearchType::Tags => "tags",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "ingredients" => SearchType::Ingredients,
            "category" => SearchType::Category,
            "tags" => SearchType::Tags,
            _ => SearchType::Name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_id_accepts_numbers_and_strings() {
        let numeric: Recipe = serde_json::from_value(json!({"id": 7, "name": "Soup"})).unwrap();
        assert_eq!(numeric.id, RecipeId::Number(7));
        assert_eq!(numeric.id.to_string(), "7");

        let textual: Recipe =
            serde_json::from_value(json!({"id": "a1b2", "name": "Soup"})).unwrap();
        assert_eq!(textual.id, RecipeId::Text("a1b2".to_string()));
        assert_eq!(RecipeId::parse(" 42 "), Some(RecipeId::Number(42)));
        assert_eq!(RecipeId::parse(""), None);
    }

    #[test]
    fn test_payload_sends_explicit_nulls() {
        let payload = RecipePayload {
            name: "Pancakes".to_string(),
            ingredients: "flour, milk, eggs".to_string(),
            instructions: "Mix everything and fry it".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["prep_time"], serde_json::Value::Null);
        assert!(value.as_object().unwrap().contains_key("servings"));
    }

    #[test]
    fn test_patch_only_sends_set_fields() {
        let value = serde_json::to_value(RecipePatch::image_url("http://img/1.png")).unwrap();
        assert_eq!(value, json!({"image_url": "http://img/1.png"}));
    }
}
