//! Trivia HTTP Routes
//!
//! Route table for categories, questions and quizzes. Handlers only extract
//! request parts and delegate to [`TriviaHandler`].

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use tracing::debug;

use crate::rest_api::response::{
    CategoriesResponse, CategoryQuestionsResponse, CreateResponse, DeleteResponse,
    QuestionPageResponse, QuizResponse, SearchResponse,
};
use crate::rest_api::{page_param, parse_body, RestError, RestResult, TriviaHandler};

// ==================
// Trivia Routes
// ==================

/// Create trivia routes
pub fn trivia_routes(handler: TriviaHandler) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories_handler).fallback(method_not_allowed),
        )
        .route(
            "/categories/:id/questions",
            get(category_questions_handler).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(list_questions_handler)
                .post(create_question_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(search_questions_handler).fallback(method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(delete_question_handler).fallback(method_not_allowed),
        )
        .route("/quizzes", post(play_quiz_handler).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(handler)
}

async fn method_not_allowed() -> RestError {
    RestError::MethodNotAllowed
}

async fn not_found() -> RestError {
    RestError::NotFound
}

// Extractor rejections go through the same envelope as handler errors.

/// A path id that cannot be decoded names no row
fn path_id(path: Result<Path<String>, PathRejection>) -> RestResult<String> {
    path.map(|Path(id)| id).map_err(|rejection| {
        debug!(error = %rejection, "path rejected");
        RestError::NotFound
    })
}

fn page_query(query: Result<Query<HashMap<String, String>>, QueryRejection>) -> RestResult<i64> {
    query
        .map(|Query(query)| page_param(&query))
        .map_err(|rejection| RestError::BadRequest(rejection.body_text()))
}

fn json_body(body: Result<Bytes, BytesRejection>) -> RestResult<Option<serde_json::Value>> {
    body.map(|bytes| parse_body(&bytes))
        .map_err(|rejection| RestError::BadRequest(rejection.body_text()))
}

// ==================
// Category Handlers
// ==================

async fn list_categories_handler(
    State(handler): State<TriviaHandler>,
) -> RestResult<Json<CategoriesResponse>> {
    Ok(Json(handler.list_categories().await?))
}

async fn category_questions_handler(
    State(handler): State<TriviaHandler>,
    id: Result<Path<String>, PathRejection>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RestResult<Json<CategoryQuestionsResponse>> {
    let id = path_id(id)?;
    let page = page_query(query)?;
    Ok(Json(handler.category_questions(&id, page).await?))
}

// ==================
// Question Handlers
// ==================

async fn list_questions_handler(
    State(handler): State<TriviaHandler>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RestResult<Json<QuestionPageResponse>> {
    let page = page_query(query)?;
    Ok(Json(handler.list_questions(page).await?))
}

async fn create_question_handler(
    State(handler): State<TriviaHandler>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> RestResult<Json<CreateResponse>> {
    let page = page_query(query)?;
    let body = json_body(body)?;
    Ok(Json(handler.create_question(page, body.as_ref()).await?))
}

async fn search_questions_handler(
    State(handler): State<TriviaHandler>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> RestResult<Json<SearchResponse>> {
    let page = page_query(query)?;
    let body = json_body(body)?;
    Ok(Json(handler.search_questions(page, body.as_ref()).await?))
}

async fn delete_question_handler(
    State(handler): State<TriviaHandler>,
    id: Result<Path<String>, PathRejection>,
) -> RestResult<Json<DeleteResponse>> {
    let id = path_id(id)?;
    Ok(Json(handler.delete_question(&id).await?))
}

// ==================
// Quiz Handlers
// ==================

async fn play_quiz_handler(
    State(handler): State<TriviaHandler>,
    body: Result<Bytes, BytesRejection>,
) -> RestResult<Json<QuizResponse>> {
    let body = json_body(body)?;
    Ok(Json(handler.play_quiz(body.as_ref()).await?))
}
