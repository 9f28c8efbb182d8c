//! UI Components
//!
//! Leptos components binding the view models to the DOM, one per page plus
//! the shared pieces they are built from.

mod all_recipes;
mod delete_button;
mod home;
mod nav_bar;
mod recipe_card;
mod recipe_detail;
mod recipe_form;
mod recipe_grid;
mod search_panel;

pub use all_recipes::AllRecipesPage;
pub use delete_button::DeleteRecipeButton;
pub use home::HomePage;
pub use nav_bar::NavBar;
pub use recipe_card::RecipeCard;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_form::RecipeFormPage;
pub use recipe_grid::RecipeGrid;
pub use search_panel::SearchPage;
