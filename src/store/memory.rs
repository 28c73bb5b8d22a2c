//! # In-Memory Store
//!
//! [`QuestionStore`] over two ordered maps. Used by tests and by anyone who
//! wants the API without a database file. Enforces the same category
//! reference rule as the SQL schema.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::models::{Category, NewQuestion, Question};
use super::QuestionStore;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    /// Last assigned question id; ids are never reused
    last_id: i64,
}

/// In-memory question store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`StoreError::Unavailable`].
    /// Lets tests drive the rollback path.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn random_questions(&self, category: Option<i64>) -> StoreResult<Vec<Question>> {
        let mut selection: Vec<Question> = {
            let tables = self.tables.read().await;
            tables
                .questions
                .values()
                .filter(|q| category.map_or(true, |c| q.category == c))
                .cloned()
                .collect()
        };
        selection.shuffle(&mut rand::thread_rng());
        Ok(selection)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        self.check_writable()?;
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&question.category) {
            return Err(StoreError::ForeignKey(question.category));
        }
        tables.last_id += 1;
        let stored = question.with_id(tables.last_id);
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        self.check_writable()?;
        let mut tables = self.tables.write().await;
        tables.questions.remove(&id);
        Ok(())
    }

    async fn insert_category(&self, category: Category) -> StoreResult<()> {
        self.check_writable()?;
        let mut tables = self.tables.write().await;
        tables.categories.insert(category.id, category);
        Ok(())
    }
}
