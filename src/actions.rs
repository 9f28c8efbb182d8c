//! Recipe Write Workflows
//!
//! Multi-step writes the pages perform: validate-save-attach for the forms,
//! confirm-then-remove for delete buttons.

use recipe_api::{ApiError, ImageUpload, Recipe, RecipeClient, RecipeId, RecipePatch, Transport};
use thiserror::Error;

use crate::form::{build_payload, RecipeForm, ValidationErrors};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitMode {
    Create,
    Edit(RecipeId),
}

/// The image picked in the form, once the browser has read the file
#[derive(Debug, Clone)]
pub enum ChosenImage {
    Ready(ImageUpload),
    /// Reading the file failed; carries the reason
    Unreadable(String),
}

/// What happened to the chosen image after the recipe itself was saved
#[derive(Debug, Clone, PartialEq)]
pub enum ImageOutcome {
    /// No image was chosen
    None,
    Attached,
    /// Recipe saved, but the upload or the `image_url` patch failed
    Failed(ApiError),
    /// Recipe saved, but the chosen file could not be read
    Unreadable(String),
}

impl ImageOutcome {
    /// An image was chosen but is not on the saved recipe
    pub fn is_failure(&self) -> bool {
        matches!(self, ImageOutcome::Failed(_) | ImageOutcome::Unreadable(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub recipe: Recipe,
    pub image: ImageOutcome,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Error saving recipe: {0}")]
    Write(#[from] ApiError),
}

/// Validate, save, then upload and attach the image, strictly in that order
pub async fn submit_recipe<T: Transport>(
    client: &RecipeClient<T>,
    mode: &SubmitMode,
    form: &RecipeForm,
    image: Option<ChosenImage>,
) -> Result<SubmitOutcome, SubmitError> {
    let payload = build_payload(form)?;

    let saved = match mode {
        SubmitMode::Create => client.create(&payload).await?,
        SubmitMode::Edit(id) => client.update(id, &payload).await?,
    };
    log::info!("Saved recipe {} ({})", saved.id, saved.name);

    let image = match image {
        None => {
            return Ok(SubmitOutcome {
                recipe: saved,
                image: ImageOutcome::None,
            })
        }
        Some(ChosenImage::Unreadable(reason)) => {
            log::warn!("Recipe {} saved without its image: {}", saved.id, reason);
            return Ok(SubmitOutcome {
                recipe: saved,
                image: ImageOutcome::Unreadable(reason),
            });
        }
        Some(ChosenImage::Ready(image)) => image,
    };

    match attach_image(client, &saved.id, image).await {
        Ok(recipe) => Ok(SubmitOutcome {
            recipe,
            image: ImageOutcome::Attached,
        }),
        Err(e) => {
            log::warn!("Recipe {} saved without its image: {}", saved.id, e);
            Ok(SubmitOutcome {
                recipe: saved,
                image: ImageOutcome::Failed(e),
            })
        }
    }
}

async fn attach_image<T: Transport>(
    client: &RecipeClient<T>,
    id: &RecipeId,
    image: ImageUpload,
) -> Result<Recipe, ApiError> {
    let uploaded = client.upload_image(image).await?;
    client
        .partial_update(id, &RecipePatch::image_url(uploaded.image_url))
        .await
}

/// Delete on the backend, then run `remove` against the live state.
/// `remove` must read the lists when called, not before the request, so
/// overlapping deletes don't restore each other's cards.
pub async fn delete_and_remove<T: Transport>(
    client: &RecipeClient<T>,
    id: &RecipeId,
    remove: impl FnOnce(&RecipeId),
) -> Result<(), ApiError> {
    client.delete(id).await?;
    remove(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use async_trait::async_trait;
    use recipe_api::memory::MemoryBackend;
    use recipe_api::{ApiConfig, ApiRequest, ApiResponse, ApiResult, Method};
    use std::cell::RefCell;

    /// Gives other tasks a turn before every request reaches the backend
    struct YieldingTransport(MemoryBackend);

    #[async_trait(?Send)]
    impl Transport for YieldingTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            tokio::task::yield_now().await;
            self.0.send(request).await
        }
    }

    fn setup() -> (MemoryBackend, RecipeClient<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let client = RecipeClient::new(backend.clone(), ApiConfig::new(MemoryBackend::BASE_URL));
        (backend, client)
    }

    fn form(name: &str) -> RecipeForm {
        RecipeForm {
            name: name.to_string(),
            ingredients: "500g spaghetti\n200g guanciale".to_string(),
            instructions: "Boil the pasta.\nCrisp the guanciale.\nToss with egg.".to_string(),
            servings: "4".to_string(),
            ..Default::default()
        }
    }

    fn image() -> ChosenImage {
        ChosenImage::Ready(ImageUpload {
            file_name: "carbonara.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        })
    }

    #[tokio::test]
    async fn test_invalid_form_performs_no_write() {
        let (backend, client) = setup();

        let err = submit_recipe(&client, &SubmitMode::Create, &form("ab"), Some(image()))
            .await
            .unwrap_err();

        match err {
            SubmitError::Validation(errors) => assert!(errors.has(FormField::Name)),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(backend.write_count(), 0);
    }

    #[tokio::test]
    async fn test_create_without_image() {
        let (backend, client) = setup();

        let outcome = submit_recipe(&client, &SubmitMode::Create, &form("Carbonara"), None)
            .await
            .unwrap();

        assert_eq!(outcome.image, ImageOutcome::None);
        assert!(!outcome.image.is_failure());
        assert_eq!(outcome.recipe.servings, Some(4));
        assert_eq!(backend.recipes().len(), 1);
    }

    #[tokio::test]
    async fn test_image_upload_then_patch_in_order() {
        let (backend, client) = setup();

        let outcome = submit_recipe(&client, &SubmitMode::Create, &form("Carbonara"), Some(image()))
            .await
            .unwrap();

        assert_eq!(outcome.image, ImageOutcome::Attached);
        assert!(outcome
            .recipe
            .image_url
            .as_deref()
            .is_some_and(|url| url.ends_with("/uploads/carbonara.png")));

        let calls: Vec<(Method, String)> = backend
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url.trim_start_matches(MemoryBackend::BASE_URL).to_string()))
            .collect();
        assert_eq!(
            calls,
            vec![
                (Method::POST, "/recipes".to_string()),
                (Method::POST, "/upload".to_string()),
                (Method::PATCH, format!("/recipes/{}", outcome.recipe.id)),
            ]
        );
    }

    #[tokio::test]
    async fn test_image_failure_is_partial_success() {
        let (backend, client) = setup();
        backend.fail_route(Method::POST, "/upload");

        let outcome = submit_recipe(&client, &SubmitMode::Create, &form("Carbonara"), Some(image()))
            .await
            .unwrap();

        assert!(matches!(outcome.image, ImageOutcome::Failed(ApiError::Status(500))));
        assert!(outcome.image.is_failure());
        assert_eq!(outcome.recipe.image_url, None);
        assert_eq!(backend.recipes().len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_image_saves_recipe_and_reports_failure() {
        let (backend, client) = setup();
        let unreadable = ChosenImage::Unreadable("NotReadableError".to_string());

        let outcome =
            submit_recipe(&client, &SubmitMode::Create, &form("Carbonara"), Some(unreadable))
                .await
                .unwrap();

        assert!(outcome.image.is_failure());
        assert_eq!(outcome.recipe.image_url, None);
        assert_eq!(backend.recipes().len(), 1);
        assert_eq!(backend.write_count(), 1);
    }

    #[tokio::test]
    async fn test_edit_updates_existing_recipe() {
        let (backend, client) = setup();
        let created = submit_recipe(&client, &SubmitMode::Create, &form("Carbonara"), None)
            .await
            .unwrap()
            .recipe;

        let mut edited = RecipeForm::from_recipe(&created);
        edited.name = "Carbonara Romana".to_string();
        let outcome = submit_recipe(&client, &SubmitMode::Edit(created.id.clone()), &edited, None)
            .await
            .unwrap();

        assert_eq!(outcome.recipe.id, created.id);
        assert_eq!(backend.recipes()[0].name, "Carbonara Romana");
    }

    #[tokio::test]
    async fn test_write_failure_is_error() {
        let (backend, client) = setup();
        backend.go_offline();

        let err = submit_recipe(&client, &SubmitMode::Create, &form("Carbonara"), Some(image()))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Write(_)));
        assert!(err.to_string().starts_with("Error saving recipe"));
    }

    fn remove_from(list: &RefCell<Vec<Recipe>>) -> impl FnOnce(&RecipeId) + '_ {
        move |id: &RecipeId| list.borrow_mut().retain(|recipe| &recipe.id != id)
    }

    fn names(list: &RefCell<Vec<Recipe>>) -> Vec<String> {
        list.borrow().iter().map(|r| r.name.clone()).collect()
    }

    #[tokio::test]
    async fn test_delete_removes_only_after_success() {
        let (backend, client) = setup();
        for name in ["Carbonara", "Amatriciana"] {
            submit_recipe(&client, &SubmitMode::Create, &form(name), None)
                .await
                .unwrap();
        }
        let list = RefCell::new(client.list_all().await);
        let first = list.borrow()[0].id.clone();

        backend.go_offline();
        assert!(delete_and_remove(&client, &first, remove_from(&list)).await.is_err());
        assert_eq!(list.borrow().len(), 2);

        backend.recover();
        delete_and_remove(&client, &first, remove_from(&list)).await.unwrap();
        assert_eq!(list.borrow().len(), 1);
        assert_ne!(list.borrow()[0].id, first);
        assert_eq!(backend.recipes().len(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_deletes_keep_both_removals() {
        let (backend, client) = setup();
        for name in ["Alfa", "Bravo", "Charlie"] {
            submit_recipe(&client, &SubmitMode::Create, &form(name), None)
                .await
                .unwrap();
        }
        let slow = RecipeClient::new(
            YieldingTransport(backend.clone()),
            ApiConfig::new(MemoryBackend::BASE_URL),
        );
        let list = RefCell::new(backend.recipes());
        let alfa = list.borrow()[0].id.clone();
        let bravo = list.borrow()[1].id.clone();

        let (first, second) = tokio::join!(
            delete_and_remove(&slow, &alfa, remove_from(&list)),
            delete_and_remove(&slow, &bravo, remove_from(&list)),
        );
        first.unwrap();
        second.unwrap();

        assert_eq!(names(&list), vec!["Charlie".to_string()]);
        let stored: Vec<String> = backend.recipes().into_iter().map(|r| r.name).collect();
        assert_eq!(stored, names(&list));
    }
}
