//! Catalog service: query operations and the save/update reconciliation core

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorDto},
        book::{Book, BookDto, BookUpsert},
        category::{Category, CategoryDto},
    },
    repository::{AuthorStore, BookStore, CategoryStore},
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookStore>,
    authors: Arc<dyn AuthorStore>,
    categories: Arc<dyn CategoryStore>,
}

impl CatalogService {
    pub fn new(
        books: Arc<dyn BookStore>,
        authors: Arc<dyn AuthorStore>,
        categories: Arc<dyn CategoryStore>,
    ) -> Self {
        Self {
            books,
            authors,
            categories,
        }
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<BookDto>> {
        let books = self.books.find_all().await?;
        Ok(books.iter().map(BookDto::from_record).collect())
    }

    /// Get a single book by ID
    pub async fn get_book(&self, book_id: i64) -> AppResult<BookDto> {
        self.books
            .find_by_id(book_id)
            .await?
            .map(|book| BookDto::from_record(&book))
            .ok_or_else(|| AppError::NotFound(format!("Book not found for ID: {}", book_id)))
    }

    /// List all authors with the titles of their books
    pub async fn list_authors(&self) -> AppResult<Vec<AuthorDto>> {
        let authors = self.authors.find_all().await?;
        let mut result = Vec::with_capacity(authors.len());
        for author in &authors {
            let titles = self.authors.book_titles(author.author_id).await?;
            result.push(AuthorDto::from_record(author, titles));
        }
        Ok(result)
    }

    /// Get a single author by ID, with the titles of their books
    pub async fn get_author(&self, author_id: i64) -> AppResult<AuthorDto> {
        let author = self
            .authors
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("author not found for ID: {}", author_id)))?;
        let titles = self.authors.book_titles(author.author_id).await?;
        Ok(AuthorDto::from_record(&author, titles))
    }

    /// List all categories with the titles of their books
    pub async fn list_categories(&self) -> AppResult<Vec<CategoryDto>> {
        let categories = self.categories.find_all().await?;
        let mut result = Vec::with_capacity(categories.len());
        for category in &categories {
            let titles = self.categories.book_titles(category.category_id).await?;
            result.push(CategoryDto::from_record(category, titles));
        }
        Ok(result)
    }

    /// Books filed under the given category name. A missing category yields
    /// an empty list, observably identical to a category with no books.
    pub async fn books_by_category(&self, category_name: &str) -> AppResult<Vec<BookDto>> {
        match self
            .categories
            .find_by_name(Some(category_name.to_string()))
            .await?
        {
            Some(category) => {
                let books = self.categories.find_books(category.category_id).await?;
                Ok(books.iter().map(BookDto::from_record).collect())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Save or update a batch of books, resolving each record's author and
    /// category first.
    ///
    /// Records are processed strictly in input order, so a record citing a
    /// name first introduced earlier in the same batch reuses the row
    /// created for it. There is no cross-record transaction: the first
    /// failing save aborts the remainder of the batch.
    pub async fn save_books(&self, incoming: Vec<BookDto>) -> AppResult<Vec<BookDto>> {
        let mut saved = Vec::with_capacity(incoming.len());
        for dto in &incoming {
            let book = self.reconcile_book(dto).await?;
            saved.push(BookDto::from_record(&book));
        }
        Ok(saved)
    }

    /// Insert or update one book. A caller-supplied ID that matches no row
    /// creates a new row under that exact ID; an absent ID lets the store
    /// assign one.
    async fn reconcile_book(&self, dto: &BookDto) -> AppResult<Book> {
        let author = self.get_or_create_author(dto.author_name.clone()).await?;
        let category = self
            .get_or_create_category(dto.category_name.clone())
            .await?;

        let base = match dto.book_id {
            Some(id) => match self.books.find_by_id(id).await? {
                Some(existing) => BookUpsert::from(&existing),
                None => BookUpsert::with_id(id),
            },
            None => BookUpsert::default(),
        };

        // every field is overwritten, absent ones included; only the
        // resolved identity survives from the base
        let record = BookUpsert {
            title: dto.title.clone(),
            isbn: dto.isbn,
            publication_year: dto.publication_year.clone(),
            author_id: Some(author.author_id),
            category_id: Some(category.category_id),
            ..base
        };

        self.books.save(&record).await
    }

    async fn get_or_create_author(&self, name: Option<String>) -> AppResult<Author> {
        match self.authors.find_by_name(name.clone()).await? {
            Some(author) => Ok(author),
            None => self.authors.insert(name).await,
        }
    }

    async fn get_or_create_category(&self, name: Option<String>) -> AppResult<Category> {
        match self.categories.find_by_name(name.clone()).await? {
            Some(category) => Ok(category),
            None => self.categories.insert(name).await,
        }
    }
}
