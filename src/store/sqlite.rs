//! # SQLite Store
//!
//! [`QuestionStore`] backed by a `sqlx` SQLite pool. Each write runs in its
//! own transaction and is rolled back before the error is returned.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, warn};

use super::errors::{StoreError, StoreResult};
use super::models::{Category, NewQuestion, Question};
use super::QuestionStore;

const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL
)";

const CREATE_QUESTIONS: &str = "CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
)";

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite-backed question store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap an existing pool. The caller is responsible for the schema.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `url` and ensure both
    /// tables exist.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` is a separate database.
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        let store = Self::new(pool);
        store.create_tables().await?;
        debug!(url, "sqlite store ready");
        Ok(store)
    }

    /// Create the `categories` and `questions` tables if absent
    pub async fn create_tables(&self) -> StoreResult<()> {
        sqlx::query(CREATE_CATEGORIES).execute(&self.pool).await?;
        sqlx::query(CREATE_QUESTIONS).execute(&self.pool).await?;
        Ok(())
    }
}

fn map_insert_error(err: sqlx::Error, category: i64) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            StoreError::ForeignKey(category)
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl QuestionStore for SqliteStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?");
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let sql =
            format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        // LIKE and lower() only fold ASCII, so matching happens here
        let needle = term.to_lowercase();
        let rows = self.questions().await?;
        Ok(rows
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    async fn random_questions(&self, category: Option<i64>) -> StoreResult<Vec<Question>> {
        let rows = match category {
            Some(category) => {
                let sql = format!(
                    "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY RANDOM()"
                );
                sqlx::query_as::<_, Question>(&sql)
                    .bind(category)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY RANDOM()");
                sqlx::query_as::<_, Question>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await;

        match result {
            Ok(done) => {
                tx.commit().await?;
                Ok(question.with_id(done.last_insert_rowid()))
            }
            Err(err) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "rollback after failed insert failed");
                }
                Err(map_insert_error(err, question.category))
            }
        }
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match result {
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "rollback after failed delete failed");
                }
                Err(StoreError::Database(err))
            }
        }
    }

    async fn insert_category(&self, category: Category) -> StoreResult<()> {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(category.id)
            .bind(&category.kind)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_store() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
        let store = SqliteStore::connect(&url).await.unwrap();
        store.insert_category(Category::new(1, "Science")).await.unwrap();
        store.insert_category(Category::new(2, "Art")).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_categories_ordered_by_id() {
        let (_dir, store) = open_store().await;
        store.insert_category(Category::new(0, "Zero")).await.unwrap();
        let ids: Vec<i64> = store.categories().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(store.category(2).await.unwrap().unwrap().kind, "Art");
        assert!(store.category(9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_and_delete_question() {
        let (_dir, store) = open_store().await;
        let stored = store
            .insert_question(NewQuestion::new("Who painted it?", "Me", 2, 3))
            .await
            .unwrap();
        assert_eq!(store.question(stored.id).await.unwrap(), Some(stored.clone()));

        store.delete_question(stored.id).await.unwrap();
        assert!(store.question(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_unknown_category_is_rolled_back() {
        let (_dir, store) = open_store().await;
        let result = store
            .insert_question(NewQuestion::new("Q?", "A", 42, 1))
            .await;
        assert!(matches!(result, Err(StoreError::ForeignKey(42))));
        assert!(store.questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_difficulty_check_constraint() {
        let (_dir, store) = open_store().await;
        let result = store
            .insert_question(NewQuestion::new("Q?", "A", 1, 9))
            .await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn test_search_matches_literal_substring() {
        let (_dir, store) = open_store().await;
        store
            .insert_question(NewQuestion::new("What is the TITLE?", "A", 1, 1))
            .await
            .unwrap();
        store
            .insert_question(NewQuestion::new("Give 100% effort?", "B", 1, 1))
            .await
            .unwrap();
        store
            .insert_question(NewQuestion::new("Give 100 apples?", "C", 1, 1))
            .await
            .unwrap();

        store
            .insert_question(NewQuestion::new("Où est l'ÉCOLE de Paris?", "D", 1, 1))
            .await
            .unwrap();

        assert_eq!(store.search_questions("title").await.unwrap().len(), 1);
        let school = store.search_questions("école").await.unwrap();
        assert_eq!(school.len(), 1);
        assert_eq!(school[0].answer, "D");
        assert!(store.search_questions("100_").await.unwrap().is_empty());
        let percent = store.search_questions("100%").await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].answer, "B");
    }

    #[tokio::test]
    async fn test_questions_in_category_and_random() {
        let (_dir, store) = open_store().await;
        for i in 0..4 {
            store
                .insert_question(NewQuestion::new(format!("S{i}"), "s", 1, 1))
                .await
                .unwrap();
        }
        store
            .insert_question(NewQuestion::new("A0", "a", 2, 1))
            .await
            .unwrap();

        let science = store.questions_in_category(1).await.unwrap();
        assert_eq!(science.len(), 4);
        assert!(science.windows(2).all(|w| w[0].id < w[1].id));

        assert_eq!(store.random_questions(Some(2)).await.unwrap().len(), 1);
        assert_eq!(store.random_questions(None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_in_memory_url() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store.insert_category(Category::new(1, "Science")).await.unwrap();
        assert_eq!(store.categories().await.unwrap().len(), 1);
    }
}
