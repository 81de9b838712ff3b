//! Book catalog API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{author::AuthorDto, book::BookDto, category::CategoryDto},
    AppState,
};

/// Get all the books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books list", body = Vec<BookDto>),
        (status = 404, description = "No books recorded")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookDto>>> {
    let books = state.services.catalog.list_books().await?;
    if books.is_empty() {
        return Err(AppError::Empty);
    }
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDto),
        (status = 404, description = "Unknown book ID")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> AppResult<Json<BookDto>> {
    let book = state.services.catalog.get_book(book_id).await?;
    Ok(Json(book))
}

/// Get all the authors
#[utoipa::path(
    get,
    path = "/books/authors",
    tag = "books",
    responses(
        (status = 200, description = "Authors list", body = Vec<AuthorDto>),
        (status = 404, description = "No authors recorded")
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<AuthorDto>>> {
    let authors = state.services.catalog.list_authors().await?;
    if authors.is_empty() {
        return Err(AppError::Empty);
    }
    Ok(Json(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/books/authors/{author_id}",
    tag = "books",
    params(("author_id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorDto),
        (status = 404, description = "Unknown author ID")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> AppResult<Json<AuthorDto>> {
    let author = state.services.catalog.get_author(author_id).await?;
    Ok(Json(author))
}

/// Get categories with their book titles
#[utoipa::path(
    get,
    path = "/books/categories",
    tag = "books",
    responses(
        (status = 200, description = "Categories list", body = Vec<CategoryDto>),
        (status = 404, description = "No categories recorded")
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryDto>>> {
    let categories = state.services.catalog.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::Empty);
    }
    Ok(Json(categories))
}

/// Get books by category name
///
/// Known category names: COOKING, FUN, HORROR, SCIENCE FICTION, SPIRITUAL
/// (documented, not enforced).
#[utoipa::path(
    get,
    path = "/books/categories/{category_name}",
    tag = "books",
    params(("category_name" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Books in the category", body = Vec<BookDto>),
        (status = 404, description = "Category absent or empty")
    )
)]
pub async fn books_by_category(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
) -> AppResult<Json<Vec<BookDto>>> {
    let books = state
        .services
        .catalog
        .books_by_category(&category_name)
        .await?;
    if books.is_empty() {
        return Err(AppError::NotFound(format!(
            "Books are not available for category name: {}",
            category_name
        )));
    }
    Ok(Json(books))
}

/// Save or update books
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Vec<BookDto>,
    responses(
        (status = 200, description = "Saved books", body = Vec<BookDto>)
    )
)]
pub async fn save_books(
    State(state): State<AppState>,
    Json(incoming): Json<Vec<BookDto>>,
) -> AppResult<Json<Vec<BookDto>>> {
    let saved = state.services.catalog.save_books(incoming).await?;
    Ok(Json(saved))
}
