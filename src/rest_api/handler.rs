//! # REST API Handler
//!
//! The seven trivia operations, independent of the HTTP framework. Each takes
//! already extracted inputs (page number, raw path id, parsed body) and talks
//! to the injected [`QuestionStore`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::store::{QuestionStore, StoreError};

use super::errors::{RestError, RestResult};
use super::pagination::paginate;
use super::parser::{parse_new_question, parse_quiz, parse_search_term};
use super::response::{
    category_map, CategoriesResponse, CategoryQuestionsResponse, CreateResponse, DeleteResponse,
    QuestionPageResponse, QuizResponse, SearchResponse,
};

fn read_failed(err: StoreError) -> RestError {
    RestError::Internal(err.to_string())
}

fn write_failed(err: StoreError) -> RestError {
    RestError::Unprocessable(err.to_string())
}

/// Trivia operations over a shared store
#[derive(Clone)]
pub struct TriviaHandler {
    store: Arc<dyn QuestionStore>,
}

impl TriviaHandler {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// All categories as an id → type map
    pub async fn list_categories(&self) -> RestResult<CategoriesResponse> {
        let categories = self.store.categories().await.map_err(read_failed)?;
        if categories.is_empty() {
            return Err(RestError::NotFound);
        }

        Ok(CategoriesResponse {
            success: true,
            total_categories: categories.len(),
            categories: category_map(&categories),
        })
    }

    /// One page of all questions plus the category map
    pub async fn list_questions(&self, page: i64) -> RestResult<QuestionPageResponse> {
        let questions = self.store.questions().await.map_err(read_failed)?;
        let current = paginate(page, &questions);
        let categories = self.store.categories().await.map_err(read_failed)?;

        if current.is_empty() {
            return Err(RestError::NotFound);
        }

        Ok(QuestionPageResponse {
            success: true,
            questions: current,
            total_questions: questions.len(),
            categories: category_map(&categories),
        })
    }

    /// Delete by the raw path id. The id is echoed back untouched.
    pub async fn delete_question(&self, raw_id: &str) -> RestResult<DeleteResponse> {
        let id = raw_id.trim().parse::<i64>().map_err(|_| RestError::NotFound)?;

        let existing = self.store.question(id).await.map_err(write_failed)?;
        if existing.is_none() {
            return Err(RestError::NotFound);
        }

        self.store.delete_question(id).await.map_err(write_failed)?;
        info!(question_id = id, "question deleted");

        Ok(DeleteResponse {
            success: true,
            delete: raw_id.to_string(),
        })
    }

    /// Validate and insert a question, then return the requested page
    pub async fn create_question(
        &self,
        page: i64,
        body: Option<&Value>,
    ) -> RestResult<CreateResponse> {
        let new_question = parse_new_question(body)?;

        let stored = self
            .store
            .insert_question(new_question)
            .await
            .map_err(write_failed)?;
        info!(
            question_id = stored.id,
            category = stored.category,
            "question created"
        );

        let questions = self.store.questions().await.map_err(write_failed)?;
        if questions.is_empty() {
            return Err(RestError::NotFound);
        }

        Ok(CreateResponse {
            success: true,
            id: stored.id,
            question: stored.question,
            questions: paginate(page, &questions),
            total_questions: questions.len(),
        })
    }

    /// Case-insensitive substring search over question text
    pub async fn search_questions(
        &self,
        page: i64,
        body: Option<&Value>,
    ) -> RestResult<SearchResponse> {
        let term = parse_search_term(body)?;

        let matches = self
            .store
            .search_questions(&term)
            .await
            .map_err(read_failed)?;
        let current = paginate(page, &matches);
        debug!(term = %term, matches = matches.len(), "search");

        if current.is_empty() {
            return Err(RestError::NotFound);
        }

        Ok(SearchResponse {
            success: true,
            total_questions: current.len(),
            questions: current,
        })
    }

    /// One page of questions in a category
    pub async fn category_questions(
        &self,
        raw_category_id: &str,
        page: i64,
    ) -> RestResult<CategoryQuestionsResponse> {
        let category_id = raw_category_id
            .trim()
            .parse::<i64>()
            .map_err(|_| RestError::NotFound)?;

        let category = self
            .store
            .category(category_id)
            .await
            .map_err(read_failed)?
            .ok_or(RestError::NotFound)?;

        let questions = self
            .store
            .questions_in_category(category.id)
            .await
            .map_err(read_failed)?;
        let current = paginate(page, &questions);

        if current.is_empty() {
            return Err(RestError::NotFound);
        }

        Ok(CategoryQuestionsResponse {
            success: true,
            total_questions: current.len(),
            questions: current,
            current_category: category.kind,
        })
    }

    /// Next random question not yet played in this session
    pub async fn play_quiz(&self, body: Option<&Value>) -> RestResult<QuizResponse> {
        let quiz = parse_quiz(body)?;

        let candidates = self
            .store
            .random_questions(quiz.category)
            .await
            .map_err(read_failed)?;
        if candidates.is_empty() {
            return Err(RestError::NotFound);
        }

        let question = candidates
            .into_iter()
            .find(|q| !quiz.previous_questions.contains(&q.id));
        if question.is_none() {
            debug!(
                played = quiz.previous_questions.len(),
                "quiz exhausted"
            );
        }

        Ok(QuizResponse {
            success: true,
            question,
        })
    }
}
