//! Library records
//!
//! The rows held by the record store and cached by the API layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::requests::{BookRequest, ReaderRequest};
use crate::store::Record;

/// A book in the library catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Builds an unsaved book from a request; the store assigns the id.
    pub fn from_request(req: BookRequest) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: req.title,
            author: req.author,
            year: req.year,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "Book";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn apply_update(&mut self, update: Self) {
        self.title = update.title;
        self.author = update.author;
        self.year = update.year;
        self.updated_at = Utc::now();
    }
}

/// A registered library reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reader {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reader {
    /// Builds an unsaved reader from a request; the store assigns the id.
    pub fn from_request(req: ReaderRequest) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: req.name,
            email: req.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Reader {
    const KIND: &'static str = "Reader";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn apply_update(&mut self, update: Self) {
        self.name = update.name;
        self.email = update.email;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_keeps_identity() {
        let mut book = Book::from_request(BookRequest {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            year: Some(1965),
        });
        book.set_id(4);
        let created_at = book.created_at;

        book.apply_update(Book::from_request(BookRequest {
            title: "Dune Messiah".into(),
            author: "Frank Herbert".into(),
            year: None,
        }));

        assert_eq!(book.id, 4);
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.year, None);
        assert_eq!(book.created_at, created_at);
        assert!(book.updated_at >= created_at);
    }

    #[test]
    fn test_book_serialize_skips_missing_year() {
        let book = Book::from_request(BookRequest {
            title: "Beowulf".into(),
            author: "Unknown".into(),
            year: None,
        });
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["title"], "Beowulf");
        assert!(json.get("year").is_none());
        assert!(json.get("created_at").is_some());
    }
}
