//! API Handlers
//!
//! HTTP request handlers for the library endpoints. Reads go through the
//! cache first and populate it on a miss; writes go to the store and then
//! invalidate the cache keys they made stale.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::api::resource::{CachedValue, Resource};
use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{LibraryError, Result};
use crate::models::{Book, DeleteResponse, HealthResponse, Reader, StatsResponse};
use crate::store::RecordStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-through cache in front of both tables
    pub cache: Arc<TtlCache<CachedValue>>,
    /// Book table
    pub books: Arc<RecordStore<Book>>,
    /// Reader table
    pub readers: Arc<RecordStore<Reader>>,
}

impl AppState {
    /// Creates a new AppState around the given cache with empty tables.
    pub fn new(cache: TtlCache<CachedValue>) -> Self {
        Self {
            cache: Arc::new(cache),
            books: Arc::new(RecordStore::new()),
            readers: Arc::new(RecordStore::new()),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(TtlCache::new(config.cache_ttl))
    }
}

/// Handler for GET /{resource}
pub async fn list_handler<R: Resource>(State(state): State<AppState>) -> Json<Vec<R>> {
    let key = R::list_key();
    if let Some(list) = state.cache.get(&key).and_then(R::list_from_cached) {
        return Json(list.as_ref().clone());
    }

    let list = R::store(&state).list().await;
    debug!(key = %key, count = list.len(), "Populating cache from store");
    state
        .cache
        .set(key, R::list_into_cached(Arc::new(list.clone())));

    Json(list)
}

/// Handler for GET /{resource}/:id
pub async fn get_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<R>> {
    let key = R::id_key(id);
    if let Some(record) = state.cache.get(&key).and_then(R::from_cached) {
        return Ok(Json(record));
    }

    let record = R::store(&state).get(id).await?;
    debug!(key = %key, "Populating cache from store");
    state.cache.set(key, record.clone().into_cached());

    Ok(Json(record))
}

/// Handler for POST /{resource}
pub async fn create_handler<R: Resource>(
    State(state): State<AppState>,
    Json(req): Json<R::Request>,
) -> Result<(StatusCode, Json<R>)> {
    if let Some(error_msg) = R::validate(&req) {
        return Err(LibraryError::InvalidRequest(error_msg));
    }

    let record = R::store(&state).insert(R::from_request(req)).await;
    state.cache.invalidate(&R::list_key());

    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for PUT /{resource}/:id
pub async fn update_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<R::Request>,
) -> Result<Json<R>> {
    if let Some(error_msg) = R::validate(&req) {
        return Err(LibraryError::InvalidRequest(error_msg));
    }

    let record = R::store(&state).update(id, R::from_request(req)).await?;
    state.cache.invalidate(&R::id_key(id));
    state.cache.invalidate(&R::list_key());

    Ok(Json(record))
}

/// Handler for DELETE /{resource}/:id
pub async fn delete_handler<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    R::store(&state).delete(id).await?;
    state.cache.invalidate(&R::id_key(id));
    state.cache.invalidate(&R::list_key());

    Ok(Json(DeleteResponse::new(R::KIND, 1)))
}

/// Handler for DELETE /{resource}
///
/// Drops the whole cache namespace of the resource.
pub async fn delete_all_handler<R: Resource>(
    State(state): State<AppState>,
) -> Json<DeleteResponse> {
    let deleted = R::store(&state).delete_all().await;
    state.cache.invalidate_pattern(R::PREFIX);

    Json(DeleteResponse::new(R::KIND, deleted))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.cache.stats(),
        state.cache.ttl().as_secs(),
    ))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> StatusCode {
    state.cache.clear();
    StatusCode::NO_CONTENT
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::keys::{book_id_key, book_list_key, reader_list_key};
    use crate::cache::NoopObserver;
    use crate::models::{BookRequest, ReaderRequest};

    fn test_state() -> AppState {
        AppState::new(TtlCache::with_observer(300, Arc::new(NoopObserver)))
    }

    fn book_request(title: &str) -> BookRequest {
        BookRequest {
            title: title.to_string(),
            author: "Ursula K. Le Guin".to_string(),
            year: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_book() {
        let state = test_state();

        let (status, Json(created)) =
            create_handler::<Book>(State(state.clone()), Json(book_request("Earthsea")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = get_handler::<Book>(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(fetched, created);
        assert!(state.cache.get(&book_id_key(created.id)).is_some());
    }

    #[tokio::test]
    async fn test_get_serves_from_cache() {
        let state = test_state();
        let created = state.books.insert(Book::from_request(book_request("A"))).await;

        let _ = get_handler::<Book>(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        // Bypass the handlers so only the cache still knows the record
        state.books.delete(created.id).await.unwrap();

        let Json(cached) = get_handler::<Book>(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(cached.title, "A");
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let state = test_state();

        let result = get_handler::<Book>(State(state.clone()), Path(99)).await;
        assert!(matches!(result, Err(LibraryError::NotFound(_))));
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_create_invalidates_list() {
        let state = test_state();

        let Json(empty) = list_handler::<Book>(State(state.clone())).await;
        assert!(empty.is_empty());
        assert!(state.cache.get(&book_list_key()).is_some());

        let _ = create_handler::<Book>(State(state.clone()), Json(book_request("B")))
            .await
            .unwrap();
        assert!(state.cache.get(&book_list_key()).is_none());

        let Json(list) = list_handler::<Book>(State(state)).await;
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_update_invalidates_item_and_list() {
        let state = test_state();
        let created = state.books.insert(Book::from_request(book_request("Old"))).await;
        let _ = get_handler::<Book>(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        let _ = list_handler::<Book>(State(state.clone())).await;

        let Json(updated) = update_handler::<Book>(
            State(state.clone()),
            Path(created.id),
            Json(book_request("New")),
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "New");
        assert!(state.cache.get(&book_id_key(created.id)).is_none());
        assert!(state.cache.get(&book_list_key()).is_none());
    }

    #[tokio::test]
    async fn test_delete_all_only_touches_own_namespace() {
        let state = test_state();
        state.books.insert(Book::from_request(book_request("X"))).await;
        state
            .readers
            .insert(Reader::from_request(ReaderRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }))
            .await;
        let _ = list_handler::<Book>(State(state.clone())).await;
        let _ = list_handler::<Reader>(State(state.clone())).await;
        let _ = get_handler::<Book>(State(state.clone()), Path(1)).await.unwrap();

        let Json(response) = delete_all_handler::<Book>(State(state.clone())).await;

        assert_eq!(response.deleted, 1);
        assert!(state.cache.get(&book_list_key()).is_none());
        assert!(state.cache.get(&book_id_key(1)).is_none());
        assert!(state.cache.get(&reader_list_key()).is_some());
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let state = test_state();

        let result = create_handler::<Reader>(
            State(state),
            Json(ReaderRequest {
                name: "".to_string(),
                email: "nobody@example.com".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(LibraryError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let state = test_state();
        let _ = list_handler::<Book>(State(state.clone())).await;
        let _ = list_handler::<Reader>(State(state.clone())).await;

        let status = clear_cache_handler(State(state.clone())).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        let _ = list_handler::<Book>(State(state.clone())).await; // miss
        let _ = list_handler::<Book>(State(state.clone())).await; // hit

        let Json(response) = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.ttl_seconds, 300);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
