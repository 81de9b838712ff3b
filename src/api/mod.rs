//! API handlers for the Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
