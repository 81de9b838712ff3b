//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::author::Author};

use super::AuthorStore;

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT author_id, author_name FROM authors ORDER BY author_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, author_id: i64) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>(
            "SELECT author_id, author_name FROM authors WHERE author_id = $1",
        )
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: Option<String>) -> AppResult<Option<Author>> {
        // equality against a NULL bind matches nothing, so an absent name
        // always reads as "no existing author"
        let row = sqlx::query_as::<_, Author>(
            "SELECT author_id, author_name FROM authors WHERE author_name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, name: Option<String>) -> AppResult<Author> {
        // insert-or-return-existing under the unique name index; NULL names
        // are exempt from the index and insert a fresh anonymous row
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (author_name) VALUES ($1)
            ON CONFLICT (author_name) DO UPDATE SET author_name = EXCLUDED.author_name
            RETURNING author_id, author_name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn book_titles(&self, author_id: i64) -> AppResult<Vec<String>> {
        let titles: Vec<Option<String>> =
            sqlx::query_scalar("SELECT title FROM books WHERE author_id = $1 ORDER BY book_id")
                .bind(author_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(titles.into_iter().flatten().collect())
    }
}
