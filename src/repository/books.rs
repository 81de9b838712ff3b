//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, BookUpsert},
};

use super::BookStore;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.book_id, b.title, b.isbn, b.publication_year,
                   b.author_id, b.category_id,
                   a.author_name, c.category_name
            FROM books b
            LEFT JOIN authors a ON a.author_id = b.author_id
            LEFT JOIN categories c ON c.category_id = b.category_id
            ORDER BY b.book_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, book_id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.book_id, b.title, b.isbn, b.publication_year,
                   b.author_id, b.category_id,
                   a.author_name, c.category_name
            FROM books b
            LEFT JOIN authors a ON a.author_id = b.author_id
            LEFT JOIN categories c ON c.category_id = b.category_id
            WHERE b.book_id = $1
            "#,
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, book: &BookUpsert) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            WITH saved AS (
                INSERT INTO books (book_id, title, isbn, publication_year, author_id, category_id)
                VALUES (
                    COALESCE($1, nextval(pg_get_serial_sequence('books', 'book_id'))),
                    $2, $3, $4, $5, $6
                )
                ON CONFLICT (book_id) DO UPDATE SET
                    title = EXCLUDED.title,
                    isbn = EXCLUDED.isbn,
                    publication_year = EXCLUDED.publication_year,
                    author_id = EXCLUDED.author_id,
                    category_id = EXCLUDED.category_id
                RETURNING book_id, title, isbn, publication_year, author_id, category_id
            )
            SELECT s.book_id, s.title, s.isbn, s.publication_year,
                   s.author_id, s.category_id,
                   a.author_name, c.category_name
            FROM saved s
            LEFT JOIN authors a ON a.author_id = s.author_id
            LEFT JOIN categories c ON c.category_id = s.category_id
            "#,
        )
        .bind(book.book_id)
        .bind(&book.title)
        .bind(book.isbn)
        .bind(&book.publication_year)
        .bind(book.author_id)
        .bind(book.category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
