//! Snippets Module
//!
//! Identity-scoped snippet CRUD and search.
//!
//! - **`db`** - the `SnippetStore` seam and its Postgres implementation
//! - **`handlers`** - HTTP handlers for `/snippets`

pub mod db;
pub mod handlers;

pub use db::{PgSnippetStore, SnippetStore};
pub use handlers::{
    create_snippet, delete_snippet, get_snippet, list_snippets, search_snippets, update_snippet,
};
