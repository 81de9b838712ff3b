//! Author model and transfer record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author row. The name doubles as the natural lookup key for
/// reconciliation and may be NULL (anonymous author).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub author_id: i64,
    pub author_name: Option<String>,
}

/// Author projection carrying the titles of all books referencing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub author_id: i64,
    pub author_name: Option<String>,
    pub titles: Vec<String>,
}

impl AuthorDto {
    /// Combine an author row with the titles of its books. Title order is
    /// the underlying collection order, not sorted.
    pub fn from_record(author: &Author, titles: Vec<String>) -> Self {
        Self {
            author_id: author.author_id,
            author_name: author.author_name.clone(),
            titles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_carries_titles_in_given_order() {
        let author = Author {
            author_id: 7,
            author_name: Some("Robert Cecil Martin".to_string()),
        };
        let dto = AuthorDto::from_record(
            &author,
            vec!["Clean Code".to_string(), "Clean Architecture".to_string()],
        );
        assert_eq!(dto.author_id, 7);
        assert_eq!(dto.author_name.as_deref(), Some("Robert Cecil Martin"));
        assert_eq!(dto.titles, ["Clean Code", "Clean Architecture"]);
    }

    #[test]
    fn dto_serializes_camel_case() {
        let author = Author {
            author_id: 7,
            author_name: None,
        };
        let json = serde_json::to_value(AuthorDto::from_record(&author, vec![])).unwrap();
        assert_eq!(json["authorId"], 7);
        assert!(json["authorName"].is_null());
        assert_eq!(json["titles"], serde_json::json!([]));
    }
}
