//! Cached Resources
//!
//! Ties each record type to its store, its cache keys and its slot in the
//! shared cache value type, so one set of handlers serves every resource.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::api::AppState;
use crate::cache::keys::{
    book_id_key, book_list_key, reader_id_key, reader_list_key, BOOKS_PREFIX, READERS_PREFIX,
};
use crate::models::{Book, BookRequest, Reader, ReaderRequest};
use crate::store::{Record, RecordStore};

// == Cached Value ==
/// Payload stored in the application cache.
///
/// Books and readers share one cache and one key namespace; each key always
/// holds the variant its helper implies.
#[derive(Debug, Clone)]
pub enum CachedValue {
    Book(Book),
    Books(Arc<Vec<Book>>),
    Reader(Reader),
    Readers(Arc<Vec<Reader>>),
}

// == Resource Trait ==
/// A record type exposed over HTTP with read-through caching.
pub trait Resource: Record + Serialize + Sized + 'static {
    /// Prefix shared by every cache key of this resource
    const PREFIX: &'static str;

    /// Body accepted by create and update
    type Request: DeserializeOwned + Send + 'static;

    fn validate(req: &Self::Request) -> Option<String>;

    fn from_request(req: Self::Request) -> Self;

    fn list_key() -> String;

    fn id_key(id: u64) -> String;

    fn store(state: &AppState) -> &RecordStore<Self>;

    fn into_cached(self) -> CachedValue;

    fn list_into_cached(list: Arc<Vec<Self>>) -> CachedValue;

    fn from_cached(value: CachedValue) -> Option<Self>;

    fn list_from_cached(value: CachedValue) -> Option<Arc<Vec<Self>>>;
}

impl Resource for Book {
    const PREFIX: &'static str = BOOKS_PREFIX;
    type Request = BookRequest;

    fn validate(req: &BookRequest) -> Option<String> {
        req.validate()
    }

    fn from_request(req: BookRequest) -> Self {
        Book::from_request(req)
    }

    fn list_key() -> String {
        book_list_key()
    }

    fn id_key(id: u64) -> String {
        book_id_key(id)
    }

    fn store(state: &AppState) -> &RecordStore<Self> {
        &state.books
    }

    fn into_cached(self) -> CachedValue {
        CachedValue::Book(self)
    }

    fn list_into_cached(list: Arc<Vec<Self>>) -> CachedValue {
        CachedValue::Books(list)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Book(book) => Some(book),
            _ => None,
        }
    }

    fn list_from_cached(value: CachedValue) -> Option<Arc<Vec<Self>>> {
        match value {
            CachedValue::Books(books) => Some(books),
            _ => None,
        }
    }
}

impl Resource for Reader {
    const PREFIX: &'static str = READERS_PREFIX;
    type Request = ReaderRequest;

    fn validate(req: &ReaderRequest) -> Option<String> {
        req.validate()
    }

    fn from_request(req: ReaderRequest) -> Self {
        Reader::from_request(req)
    }

    fn list_key() -> String {
        reader_list_key()
    }

    fn id_key(id: u64) -> String {
        reader_id_key(id)
    }

    fn store(state: &AppState) -> &RecordStore<Self> {
        &state.readers
    }

    fn into_cached(self) -> CachedValue {
        CachedValue::Reader(self)
    }

    fn list_into_cached(list: Arc<Vec<Self>>) -> CachedValue {
        CachedValue::Readers(list)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Reader(reader) => Some(reader),
            _ => None,
        }
    }

    fn list_from_cached(value: CachedValue) -> Option<Arc<Vec<Self>>> {
        match value {
            CachedValue::Readers(readers) => Some(readers),
            _ => None,
        }
    }
}
