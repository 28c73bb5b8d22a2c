//! # Question Store
//!
//! Persistence boundary for the trivia service. Handlers only ever see the
//! [`QuestionStore`] trait; the SQLite implementation backs the running server
//! and the in-memory one backs tests.
//!
//! Ordering contract shared by every implementation:
//! - category and question listings are ordered by ascending id
//! - `random_questions` returns a fresh random permutation on every call

pub mod errors;
pub mod memory;
pub mod models;
pub mod seed;
pub mod sqlite;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::{Category, NewQuestion, Question};
pub use sqlite::SqliteStore;

/// Reads and writes against the question and category tables
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All categories, ordered by id
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// A single category by id
    async fn category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// All questions, ordered by id
    async fn questions(&self) -> StoreResult<Vec<Question>>;

    /// A single question by id
    async fn question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions referencing the given category, ordered by id
    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case, ordered by id
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Questions in random order, optionally restricted to one category
    async fn random_questions(&self, category: Option<i64>) -> StoreResult<Vec<Question>>;

    /// Insert a question in its own transaction and return it with its new id
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Delete a question in its own transaction
    async fn delete_question(&self, id: i64) -> StoreResult<()>;

    /// Insert a category with a fixed id (bootstrap and seeding only)
    async fn insert_category(&self, category: Category) -> StoreResult<()>;
}
