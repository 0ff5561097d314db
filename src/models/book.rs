//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Book record.
///
/// `id` is assigned by the store on creation; whatever the caller sends in
/// that field is ignored by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    #[serde(default, deserialize_with = "nil_if_null")]
    pub id: Uuid,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    /// Free-form, not checked to be a numeric year
    #[validate(length(min = 1, message = "publication_year is required"))]
    pub publication_year: String,
}

fn nil_if_null<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Uuid>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Build a book without an identity yet
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            title: title.into(),
            author: author.into(),
            publication_year: publication_year.into(),
        }
    }

    /// Whether both books carry the same title, author and publication year
    pub fn same_content(&self, other: &Book) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.publication_year == other.publication_year
    }

    /// Whether this book's id matches `id` in canonical textual form
    pub fn has_id(&self, id: &str) -> bool {
        self.id.to_string() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_id() {
        let book: Book = serde_json::from_str(
            r#"{"title":"100x","author":"Prach","publication_year":"2021"}"#,
        )
        .unwrap();
        assert!(book.id.is_nil());
        assert_eq!(book.title, "100x");
        assert_eq!(book.author, "Prach");
        assert_eq!(book.publication_year, "2021");
    }

    #[test]
    fn test_null_id_is_nil() {
        let book: Book = serde_json::from_str(
            r#"{"id":null,"title":"Dune","author":"Herbert","publication_year":"1965"}"#,
        )
        .unwrap();
        assert!(book.id.is_nil());
    }

    #[test]
    fn test_malformed_id_rejected() {
        let result = serde_json::from_str::<Book>(
            r#"{"id":"abc","title":"Dune","author":"Herbert","publication_year":"1965"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = serde_json::from_str::<Book>(r#"{"title":"100x","author":"Prach"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        assert!(Book::new("Dune", "Herbert", "1965").validate().is_ok());
        assert!(Book::new("", "Herbert", "1965").validate().is_err());
        assert!(Book::new("Dune", "", "1965").validate().is_err());
        assert!(Book::new("Dune", "Herbert", "").validate().is_err());
    }

    #[test]
    fn test_year_is_free_form() {
        assert!(Book::new("Dune", "Herbert", "circa 1965").validate().is_ok());
    }

    #[test]
    fn test_same_content_ignores_id() {
        let mut a = Book::new("Dune", "Herbert", "1965");
        let b = Book::new("Dune", "Herbert", "1965");
        a.id = Uuid::new_v4();
        assert!(a.same_content(&b));
        assert!(!a.same_content(&Book::new("Dune", "Herbert", "1966")));
    }

    #[test]
    fn test_has_id_uses_hyphenated_form() {
        let mut book = Book::new("Dune", "Herbert", "1965");
        book.id = Uuid::new_v4();
        assert!(book.has_id(&book.id.to_string()));
        assert!(!book.has_id(&book.id.simple().to_string()));
    }
}
