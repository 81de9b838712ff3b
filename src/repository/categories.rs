//! Categories repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{book::Book, category::Category},
};

use super::CategoryStore;

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoriesRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name FROM categories ORDER BY category_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_name(&self, name: Option<String>) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name FROM categories WHERE category_name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, name: Option<String>) -> AppResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (category_name) VALUES ($1)
            ON CONFLICT (category_name) DO UPDATE SET category_name = EXCLUDED.category_name
            RETURNING category_id, category_name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn book_titles(&self, category_id: i64) -> AppResult<Vec<String>> {
        let titles: Vec<Option<String>> =
            sqlx::query_scalar("SELECT title FROM books WHERE category_id = $1 ORDER BY book_id")
                .bind(category_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(titles.into_iter().flatten().collect())
    }

    async fn find_books(&self, category_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.book_id, b.title, b.isbn, b.publication_year,
                   b.author_id, b.category_id,
                   a.author_name, c.category_name
            FROM books b
            LEFT JOIN authors a ON a.author_id = b.author_id
            LEFT JOIN categories c ON c.category_id = b.category_id
            WHERE b.category_id = $1
            ORDER BY b.book_id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
