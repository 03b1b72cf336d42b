//! Cache Key Namespace
//!
//! Well-known key strings for cached library records. Every key for a
//! resource starts with that resource's prefix, so `invalidate_pattern` with
//! the prefix drops the whole namespace.

/// Prefix shared by every cached book key.
pub const BOOKS_PREFIX: &str = "books:";

/// Prefix shared by every cached reader key.
pub const READERS_PREFIX: &str = "readers:";

/// Key for the cached list of all books.
pub fn book_list_key() -> String {
    format!("{BOOKS_PREFIX}list")
}

/// Key for a single cached book.
pub fn book_id_key(id: u64) -> String {
    format!("{BOOKS_PREFIX}id:{id}")
}

/// Key for the cached list of all readers.
pub fn reader_list_key() -> String {
    format!("{READERS_PREFIX}list")
}

/// Key for a single cached reader.
pub fn reader_id_key(id: u64) -> String {
    format!("{READERS_PREFIX}id:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formats() {
        assert_eq!(book_list_key(), "books:list");
        assert_eq!(book_id_key(42), "books:id:42");
        assert_eq!(reader_list_key(), "readers:list");
        assert_eq!(reader_id_key(7), "readers:id:7");
    }

    #[test]
    fn test_keys_fall_under_their_prefix() {
        assert!(book_list_key().starts_with(BOOKS_PREFIX));
        assert!(book_id_key(1).starts_with(BOOKS_PREFIX));
        assert!(reader_list_key().starts_with(READERS_PREFIX));
        assert!(reader_id_key(1).starts_with(READERS_PREFIX));

        assert!(!reader_list_key().starts_with(BOOKS_PREFIX));
        assert!(!book_list_key().starts_with(READERS_PREFIX));
    }
}
