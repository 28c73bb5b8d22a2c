//! # Response Formatting
//!
//! Success bodies for each endpoint. All carry `"success": true`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::{Category, Question};

/// Category id to display type. Keys serialize as JSON strings.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// `GET /categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// `GET /questions`
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of all questions, not just this page
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    /// Id exactly as it appeared in the path
    pub delete: String,
}

/// `POST /questions`
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub id: i64,
    pub question: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// `POST /questions/search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Length of `questions`, not of the full match set
    pub total_questions: usize,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Length of `questions`, not of the whole category
    pub total_questions: usize,
    pub current_category: String,
}

/// `POST /quizzes`. No `question` means every candidate has been played.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
