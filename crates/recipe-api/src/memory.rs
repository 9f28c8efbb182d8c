//! In-Memory Backend
//!
//! A `Transport` that emulates the recipe REST surface without a network.
//! Records every request and can be told to fail, which is what the client
//! and UI workflow tests need.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::models::Recipe;
use crate::transport::{ApiRequest, ApiResponse, RequestBody, Transport};

#[derive(Debug, Clone)]
enum Failure {
    Offline,
    Status(u16),
}

#[derive(Debug, Default)]
struct State {
    recipes: Vec<Map<String, Value>>,
    next_id: u64,
    clock: u64,
    requests: Vec<ApiRequest>,
    failure: Option<Failure>,
    failing_routes: Vec<(Method, String)>,
}

impl State {
    fn stamp(&mut self) -> String {
        self.clock += 1;
        format!("2026-01-01T10:{:02}:{:02}Z", self.clock / 60, self.clock % 60)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.recipes.iter().position(|r| id_of(r) == id)
    }
}

/// Shared handle; clones see the same recipes and request log
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<State>>,
}

impl MemoryBackend {
    pub const BASE_URL: &'static str = "http://backend.test";

    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// Number of requests that would modify data
    pub fn write_count(&self) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method != Method::GET)
            .count()
    }

    /// Stored recipes in insertion order
    pub fn recipes(&self) -> Vec<Recipe> {
        self.state
            .borrow()
            .recipes
            .iter()
            .filter_map(|r| serde_json::from_value(Value::Object(r.clone())).ok())
            .collect()
    }

    /// Answer every request with this status until `recover`
    pub fn fail_with_status(&self, status: u16) {
        self.state.borrow_mut().failure = Some(Failure::Status(status));
    }

    /// Fail every request at the transport level until `recover`
    pub fn go_offline(&self) {
        self.state.borrow_mut().failure = Some(Failure::Offline);
    }

    /// Answer 500 for one method + path (query string ignored)
    pub fn fail_route(&self, method: Method, path: &str) {
        self.state
            .borrow_mut()
            .failing_routes
            .push((method, path.to_string()));
    }

    pub fn recover(&self) {
        let mut state = self.state.borrow_mut();
        state.failure = None;
        state.failing_routes.clear();
    }

    fn handle(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());

        let target = request
            .url
            .strip_prefix(Self::BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (target, String::new()),
        };

        match state.failure.clone() {
            Some(Failure::Offline) => return Err(ApiError::Transport("connection refused".to_string())),
            Some(Failure::Status(status)) => return Ok(ApiResponse::new(status, "")),
            None => {}
        }
        if state
            .failing_routes
            .iter()
            .any(|(method, route)| *method == request.method && *route == path)
        {
            return Ok(ApiResponse::new(500, r#"{"error":"internal"}"#));
        }

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let response = match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["recipes"]) => ok(Value::Array(
                state.recipes.iter().cloned().map(Value::Object).collect(),
            )),
            ("GET", ["recipes", "search"]) => {
                let q = query_param(&query, "q").unwrap_or_default().to_lowercase();
                let field = query_param(&query, "type").unwrap_or_else(|| "name".to_string());
                let found = state
                    .recipes
                    .iter()
                    .filter(|r| {
                        r.get(&field)
                            .and_then(Value::as_str)
                            .map_or(false, |v| v.to_lowercase().contains(&q))
                    })
                    .cloned()
                    .map(Value::Object)
                    .collect();
                ok(Value::Array(found))
            }
            ("GET", ["recipes", id]) => match state.position(id) {
                Some(pos) => ok(Value::Object(state.recipes[pos].clone())),
                None => not_found(),
            },
            ("POST", ["recipes"]) => {
                let mut recipe = json_object(&request.body)?;
                state.next_id += 1;
                let stamp = state.stamp();
                recipe.insert("id".to_string(), json!(state.next_id));
                recipe.insert("created_at".to_string(), json!(stamp));
                recipe.insert("updated_at".to_string(), json!(stamp));
                state.recipes.push(recipe.clone());
                ApiResponse::new(201, Value::Object(recipe).to_string())
            }
            ("PUT" | "PATCH", ["recipes", id]) => {
                let changes = json_object(&request.body)?;
                match state.position(id) {
                    Some(pos) => {
                        let stamp = state.stamp();
                        let recipe = &mut state.recipes[pos];
                        for (key, value) in changes {
                            if key != "id" && key != "created_at" {
                                recipe.insert(key, value);
                            }
                        }
                        recipe.insert("updated_at".to_string(), json!(stamp));
                        ok(Value::Object(recipe.clone()))
                    }
                    None => not_found(),
                }
            }
            ("DELETE", ["recipes", id]) => match state.position(id) {
                Some(pos) => {
                    state.recipes.remove(pos);
                    ApiResponse::new(204, "")
                }
                None => not_found(),
            },
            ("POST", ["upload"]) => match &request.body {
                RequestBody::Multipart { file, .. } => ok(json!({
                    "image_url": format!("{}/uploads/{}", Self::BASE_URL, file.file_name)
                })),
                _ => ApiResponse::new(400, r#"{"error":"expected multipart"}"#),
            },
            _ => not_found(),
        };
        Ok(response)
    }
}

#[async_trait(?Send)]
impl Transport for MemoryBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.handle(&request)
    }
}

fn ok(value: Value) -> ApiResponse {
    ApiResponse::new(200, value.to_string())
}

fn not_found() -> ApiResponse {
    ApiResponse::new(404, r#"{"error":"not found"}"#)
}

fn id_of(recipe: &Map<String, Value>) -> String {
    match recipe.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn json_object(body: &RequestBody) -> ApiResult<Map<String, Value>> {
    match body {
        RequestBody::Json(Value::Object(map)) => Ok(map.clone()),
        _ => Err(ApiError::Decode("expected a JSON object body".to_string())),
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != name {
            return None;
        }
        let value = value.replace('+', " ");
        Some(percent_decode_str(&value).decode_utf8_lossy().into_owned())
    })
}
