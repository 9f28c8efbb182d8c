//! Recipe API Client
//!
//! Layered architecture:
//! - transport: raw request/response exchange (reqwest, or in-memory for tests)
//! - http: the single JSON wrapper every call goes through (busy state, errors)
//! - recipes: typed recipe operations with read/write failure policies

mod busy;
mod config;
mod error;
mod http;
mod models;
mod recipes;
mod transport;

#[cfg(any(test, feature = "memory"))]
pub mod memory;

pub use busy::{BusyGuard, BusyTracker};
pub use config::{endpoints, ApiConfig};
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use models::{
    ImageUpload, Recipe, RecipeId, RecipePatch, RecipePayload, SearchType, UploadedImage,
};
pub use recipes::{recent, RecipeClient, RECENT_LIMIT};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, RequestBody, Transport};

/// Re-exported so callers can build requests without depending on reqwest directly
pub use reqwest::Method;
