//! Request DTOs for the library API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating or replacing a book (POST /books, PUT /books/:id)
#[derive(Debug, Clone, Deserialize)]
pub struct BookRequest {
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Optional publication year
    #[serde(default)]
    pub year: Option<i32>,
}

impl BookRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.author.trim().is_empty() {
            return Some("Author cannot be empty".to_string());
        }
        None
    }
}

/// Request body for creating or replacing a reader (POST /readers, PUT /readers/:id)
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderRequest {
    /// Reader's full name
    pub name: String,
    /// Contact email
    pub email: String,
}

impl ReaderRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Some("Email must contain '@'".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_request_deserialize() {
        let json = r#"{"title": "Dune", "author": "Frank Herbert"}"#;
        let req: BookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.author, "Frank Herbert");
        assert!(req.year.is_none());
    }

    #[test]
    fn test_book_request_with_year() {
        let json = r#"{"title": "Dune", "author": "Frank Herbert", "year": 1965}"#;
        let req: BookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.year, Some(1965));
    }

    #[test]
    fn test_validate_blank_title() {
        let req = BookRequest {
            title: "   ".to_string(),
            author: "Someone".to_string(),
            year: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_reader_email() {
        let req = ReaderRequest {
            name: "Ada".to_string(),
            email: "ada.example.com".to_string(),
        };
        assert!(req.validate().is_some());

        let req = ReaderRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
