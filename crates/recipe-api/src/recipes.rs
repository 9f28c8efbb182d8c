//! Recipe Resource Client
//!
//! Typed recipe operations on top of the HTTP wrapper.
//!
//! Failure policy:
//! - reads (`list_all`, `get_by_id`, `search`, `recent_recipes`) log and degrade
//!   to empty/absent results so pages stay navigable during an outage
//! - writes propagate every error so the UI never reports a false success

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;

use crate::busy::BusyTracker;
use crate::config::{endpoints, ApiConfig};
use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;
use crate::models::{ImageUpload, Recipe, RecipeId, RecipePatch, RecipePayload, SearchType, UploadedImage};
use crate::transport::{HttpTransport, Transport};

/// Maximum number of recipes shown as "recent"
pub const RECENT_LIMIT: usize = 6;

/// Newest-first slice of an insertion-ordered collection
pub fn recent(recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.into_iter().rev().take(RECENT_LIMIT).collect()
}

/// Cheap to clone; clones share the transport and the busy tracker
pub struct RecipeClient<T = HttpTransport> {
    http: Rc<HttpClient<T>>,
}

impl<T> Clone for RecipeClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: Rc::clone(&self.http),
        }
    }
}

impl RecipeClient<HttpTransport> {
    /// Client for the real backend
    pub fn http(config: ApiConfig) -> Self {
        Self::new(HttpTransport::new(), config)
    }
}

impl<T: Transport> RecipeClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            http: Rc::new(HttpClient::new(transport, config)),
        }
    }

    pub fn busy(&self) -> &BusyTracker {
        self.http.busy()
    }

    // ========================
    // Reads (degrade on failure)
    // ========================

    pub async fn list_all(&self) -> Vec<Recipe> {
        match self.try_list().await {
            Ok(recipes) => recipes,
            Err(e) => {
                log::error!("Error fetching recipes: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: &RecipeId) -> Option<Recipe> {
        match self.fetch(id).await {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                log::error!("Error fetching recipe {}: {}", id, e);
                None
            }
        }
    }

    pub async fn search(&self, query: &str, search_type: SearchType) -> Vec<Recipe> {
        let path = format!(
            "{}?q={}&type={}",
            endpoints::SEARCH,
            utf8_percent_encode(query, NON_ALPHANUMERIC),
            search_type.as_str()
        );
        match self.http.request_as::<(), Vec<Recipe>>(Method::GET, &path, None).await {
            Ok(recipes) => recipes,
            Err(e) => {
                log::error!("Error searching recipes: {}", e);
                Vec::new()
            }
        }
    }

    /// Up to six most recently inserted recipes, newest first
    pub async fn recent_recipes(&self) -> Vec<Recipe> {
        recent(self.list_all().await)
    }

    /// Single recipe, propagating failures; a 404 becomes `NotFound`
    pub async fn fetch(&self, id: &RecipeId) -> ApiResult<Recipe> {
        self.http
            .request_as::<(), Recipe>(Method::GET, &endpoints::recipe(id), None)
            .await
            .map_err(|e| match e {
                ApiError::Status(404) => ApiError::NotFound(id.clone()),
                other => other,
            })
    }

    /// Propagating list call used to probe the backend at startup
    pub async fn check_connection(&self) -> ApiResult<()> {
        self.try_list().await.map(|_| ())
    }

    async fn try_list(&self) -> ApiResult<Vec<Recipe>> {
        self.http
            .request_as::<(), Vec<Recipe>>(Method::GET, endpoints::RECIPES, None)
            .await
    }

    // ========================
    // Writes (propagate failure)
    // ========================

    pub async fn create(&self, payload: &RecipePayload) -> ApiResult<Recipe> {
        self.http
            .request_as(Method::POST, endpoints::RECIPES, Some(payload))
            .await
            .map_err(|e| log_write("creating", e))
    }

    pub async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> ApiResult<Recipe> {
        self.http
            .request_as(Method::PUT, &endpoints::recipe(id), Some(payload))
            .await
            .map_err(|e| log_write("updating", e))
    }

    pub async fn partial_update(&self, id: &RecipeId, patch: &RecipePatch) -> ApiResult<Recipe> {
        self.http
            .request_as(Method::PATCH, &endpoints::recipe(id), Some(patch))
            .await
            .map_err(|e| log_write("patching", e))
    }

    pub async fn delete(&self, id: &RecipeId) -> ApiResult<()> {
        self.http
            .request(Method::DELETE, &endpoints::recipe(id), None)
            .await
            .map(|_| ())
            .map_err(|e| log_write("deleting", e))
    }

    pub async fn upload_image(&self, image: ImageUpload) -> ApiResult<UploadedImage> {
        self.http
            .upload(endpoints::UPLOAD_IMAGE, image)
            .await
            .map_err(|e| {
                log::error!("Error uploading image: {}", e);
                e
            })
    }
}

fn log_write(action: &str, err: ApiError) -> ApiError {
    log::error!("Error {} recipe: {}", action, err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::transport::RequestBody;

    fn setup() -> (MemoryBackend, RecipeClient<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let client = RecipeClient::new(backend.clone(), ApiConfig::new(MemoryBackend::BASE_URL));
        (backend, client)
    }

    fn payload(name: &str) -> RecipePayload {
        RecipePayload {
            name: name.to_string(),
            description: Some("Family favourite".to_string()),
            ingredients: "2 cups flour\n1 cup milk\n2 eggs".to_string(),
            instructions: "Whisk everything.\nRest ten minutes.\nFry in butter.".to_string(),
            prep_time: Some(10),
            cook_time: None,
            servings: Some(4),
            difficulty: Some("easy".to_string()),
            category: Some("breakfast".to_string()),
            tags: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (_backend, client) = setup();
        let submitted = payload("Pancakes");

        let created = client.create(&submitted).await.expect("Failed to create");
        let found = client.get_by_id(&created.id).await.expect("Recipe should exist");

        assert_eq!(found.name, submitted.name);
        assert_eq!(found.description, submitted.description);
        assert_eq!(found.ingredients, submitted.ingredients);
        assert_eq!(found.instructions, submitted.instructions);
        assert_eq!(found.prep_time, submitted.prep_time);
        assert_eq!(found.cook_time, submitted.cook_time);
        assert_eq!(found.servings, submitted.servings);
        assert_eq!(found.difficulty, submitted.difficulty);
        assert_eq!(found.category, submitted.category);
        assert_eq!(found.tags, submitted.tags);
        assert!(found.created_at.is_some());
    }

    #[tokio::test]
    async fn test_reads_degrade_on_failure() {
        let (backend, client) = setup();
        client.create(&payload("Pancakes")).await.unwrap();

        backend.fail_with_status(500);
        assert!(client.list_all().await.is_empty());
        assert!(client.get_by_id(&RecipeId::Number(1)).await.is_none());
        assert!(client.search("pan", SearchType::Name).await.is_empty());
        assert!(client.recent_recipes().await.is_empty());
        assert!(client.check_connection().await.is_err());
    }

    #[tokio::test]
    async fn test_writes_propagate_failure() {
        let (backend, client) = setup();
        let created = client.create(&payload("Pancakes")).await.unwrap();

        backend.go_offline();
        assert!(client.create(&payload("Waffles")).await.is_err());
        assert!(client.update(&created.id, &payload("Crepes")).await.is_err());
        assert!(client
            .partial_update(&created.id, &RecipePatch::image_url("x"))
            .await
            .is_err());
        assert!(client.delete(&created.id).await.is_err());
        assert!(!client.busy().is_busy());
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let (_backend, client) = setup();
        let missing = RecipeId::Number(99);
        assert_eq!(client.fetch(&missing).await, Err(ApiError::NotFound(missing)));
    }

    #[tokio::test]
    async fn test_recent_returns_last_six_newest_first() {
        let (_backend, client) = setup();
        for i in 1..=8 {
            client.create(&payload(&format!("Recipe {}", i))).await.unwrap();
        }

        let names: Vec<String> = client.recent_recipes().await.into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Recipe 8", "Recipe 7", "Recipe 6", "Recipe 5", "Recipe 4", "Recipe 3"]
        );
    }

    #[test]
    fn test_recent_with_fewer_than_six() {
        let recipes: Vec<Recipe> = (1..=3)
            .map(|i| serde_json::from_value(serde_json::json!({"id": i, "name": format!("R{}", i)})).unwrap())
            .collect();
        let ids: Vec<RecipeId> = recent(recipes).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecipeId::Number(3), RecipeId::Number(2), RecipeId::Number(1)]);
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let (backend, client) = setup();
        client.create(&payload("Mac & Cheese")).await.unwrap();
        client.create(&payload("Pancakes")).await.unwrap();

        let found = client.search("mac & cheese", SearchType::Name).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mac & Cheese");

        let url = backend.requests().last().unwrap().url.clone();
        assert_eq!(url, "http://backend.test/recipes/search?q=mac%20%26%20cheese&type=name");
    }

    #[tokio::test]
    async fn test_search_by_category() {
        let (_backend, client) = setup();
        client.create(&payload("Pancakes")).await.unwrap();
        let mut dinner = payload("Lasagna");
        dinner.category = Some("dinner".to_string());
        client.create(&dinner).await.unwrap();

        let found = client.search("dinner", SearchType::Category).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Lasagna");
    }

    #[tokio::test]
    async fn test_update_patch_and_delete() {
        let (backend, client) = setup();
        let created = client.create(&payload("Pancakes")).await.unwrap();

        let updated = client.update(&created.id, &payload("Buttermilk Pancakes")).await.unwrap();
        assert_eq!(updated.name, "Buttermilk Pancakes");
        assert_ne!(updated.updated_at, updated.created_at);

        let patched = client
            .partial_update(&created.id, &RecipePatch::image_url("http://img/p.png"))
            .await
            .unwrap();
        assert_eq!(patched.image_url.as_deref(), Some("http://img/p.png"));
        assert_eq!(patched.name, "Buttermilk Pancakes");

        client.delete(&created.id).await.expect("Delete failed");
        assert!(client.get_by_id(&created.id).await.is_none());

        let methods: Vec<Method> = backend.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            vec![Method::POST, Method::PUT, Method::PATCH, Method::DELETE, Method::GET]
        );
    }

    #[tokio::test]
    async fn test_upload_image_uses_multipart_field() {
        let (backend, client) = setup();
        let image = ImageUpload {
            file_name: "cake.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        };
        let uploaded = client.upload_image(image).await.unwrap();
        assert!(uploaded.image_url.ends_with("/uploads/cake.jpg"));

        let request = backend.requests().pop().unwrap();
        assert_eq!(request.method, Method::POST);
        assert!(request.url.ends_with("/upload"));
        assert!(matches!(request.body, RequestBody::Multipart { field: "image", .. }));
    }
}
