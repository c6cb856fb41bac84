//! HTTP+JSON CRUD service over an in-memory item catalog.
//!
//! # Design
//! The store is built by the caller and injected into `app`, so tests can
//! run any number of isolated instances side by side. Handlers decode the
//! body themselves instead of using axum's `Json` extractor: every decode
//! failure must surface as 400, regardless of content type or error kind.
//!
//! Everything under `/items/` is one route family. The id is scanned from
//! the start of the remaining path, so `/items/`, `/items/abc` and
//! undecodable escapes all become id 0 and end in 404, never a distinct
//! error.

pub mod error;
pub mod store;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use error::ServerError;
pub use store::{ItemStore, SharedStore};

/// A priced catalog entry. Missing fields decode to their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Success payloads, one variant per response shape.
#[derive(Debug)]
pub enum ApiResponse {
    Item(Item),
    Items(Vec<Item>),
    Message(MessageResponse),
}

impl ApiResponse {
    fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            ApiResponse::Item(item) => serde_json::to_vec(item),
            ApiResponse::Items(items) => serde_json::to_vec(items),
            ApiResponse::Message(message) => serde_json::to_vec(message),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self.encode() {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => ServerError::Internal(e.to_string()).into_response(),
        }
    }
}

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(get_item).put(update_item).delete(delete_item))
        .route("/items/{*id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Like `run`, but stops accepting connections once `shutdown` resolves.
pub async fn run_until<F>(
    listener: TcpListener,
    store: SharedStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Read a leading integer from a path segment, the way `%d` scanning does:
/// optional whitespace, an optional sign, then digits. Anything else is 0,
/// which never matches a stored item.
pub fn parse_item_id(segment: &str) -> i64 {
    let s = segment.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let end = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| sign_len + i);
    s[..end].parse().unwrap_or(0)
}

/// Id for the `/items/...` routes. A missing or undecodable segment is id 0.
fn path_id(path: Result<Path<String>, PathRejection>) -> i64 {
    match path {
        Ok(Path(raw)) => parse_item_id(&raw),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable item id, using 0");
            0
        }
    }
}

/// Decode the first JSON value in `body` as an item. Trailing data is
/// ignored, `null` (top level or per field) leaves zero values, and a
/// repeated key keeps its last value.
fn decode_item(body: &[u8]) -> Result<Item, ServerError> {
    let bad = |e: serde_json::Error| ServerError::BadRequest(e.to_string());
    let mut value = match serde_json::Deserializer::from_slice(body)
        .into_iter::<serde_json::Value>()
        .next()
    {
        Some(value) => value.map_err(bad)?,
        None => return Err(ServerError::BadRequest("empty body".to_string())),
    };
    match &mut value {
        serde_json::Value::Null => return Ok(Item::default()),
        serde_json::Value::Object(fields) => fields.retain(|_, v| !v.is_null()),
        _ => {}
    }
    serde_json::from_value(value).map_err(bad)
}

async fn list_items(State(store): State<SharedStore>) -> ApiResponse {
    let items = store.list().await;
    tracing::debug!(count = items.len(), "listed items");
    ApiResponse::Items(items)
}

async fn create_item(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<ApiResponse, ServerError> {
    let mut item = decode_item(&body)?;
    item.item_id = store.create(item.clone()).await;
    tracing::info!(item_id = item.item_id, name = %item.name, "item created");
    Ok(ApiResponse::Item(item))
}

async fn get_item(
    State(store): State<SharedStore>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ServerError> {
    let id = path_id(raw_id);
    let item = store.read(id).await.ok_or(ServerError::NotFound)?;
    tracing::debug!(item_id = id, "item fetched");
    Ok(ApiResponse::Item(item))
}

async fn update_item(
    State(store): State<SharedStore>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<ApiResponse, ServerError> {
    let id = path_id(raw_id);
    let item = decode_item(&body)?;
    if !store.update(id, item).await {
        return Err(ServerError::NotFound);
    }
    tracing::info!(item_id = id, "item updated");
    Ok(ApiResponse::Message(MessageResponse::new(
        "Item updated successfully",
    )))
}

async fn delete_item(
    State(store): State<SharedStore>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ServerError> {
    let id = path_id(raw_id);
    if !store.delete(id).await {
        return Err(ServerError::NotFound);
    }
    tracing::info!(item_id = id, "item deleted");
    Ok(ApiResponse::Message(MessageResponse::new(
        "Item deleted successfully",
    )))
}
