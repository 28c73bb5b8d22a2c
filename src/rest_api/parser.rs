//! # Request Body Parser
//!
//! Turns raw JSON bodies into typed requests. Presence checks follow JSON
//! truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` count as missing.

use serde_json::Value;

use crate::store::NewQuestion;

use super::errors::{RestError, RestResult};

/// Highest accepted difficulty (inclusive)
pub const MAX_DIFFICULTY: i64 = 5;

/// Lowest accepted difficulty (inclusive)
pub const MIN_DIFFICULTY: i64 = 1;

/// Parse a request body. Empty, malformed and falsy bodies all yield `None`.
pub fn parse_body(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .filter(is_truthy)
}

/// JSON truthiness
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Interpret a JSON integer, integral float or numeric string as `i64`
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn truthy_field<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| is_truthy(v))
}

fn text_field(body: &Value, field: &str) -> RestResult<String> {
    truthy_field(body, field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| RestError::BadRequest(format!("'{field}' must be a non-empty string")))
}

fn int_field(body: &Value, field: &str) -> RestResult<i64> {
    truthy_field(body, field)
        .and_then(coerce_int)
        .ok_or_else(|| RestError::BadRequest(format!("'{field}' must be an integer")))
}

/// Validate a create-question body
pub fn parse_new_question(body: Option<&Value>) -> RestResult<NewQuestion> {
    let body = body.ok_or_else(|| RestError::BadRequest("missing body".to_string()))?;

    let question = text_field(body, "question")?;
    let answer = text_field(body, "answer")?;
    let category = int_field(body, "category")?;
    let difficulty = int_field(body, "difficulty")?;

    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(RestError::BadRequest(format!(
            "difficulty {difficulty} outside {MIN_DIFFICULTY}..={MAX_DIFFICULTY}"
        )));
    }

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

/// Extract the search term. A missing body is reported as not found.
pub fn parse_search_term(body: Option<&Value>) -> RestResult<String> {
    let body = body.ok_or(RestError::NotFound)?;
    text_field(body, "searchTerm")
}

/// Validated quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    /// Ids already shown in this quiz session
    pub previous_questions: Vec<i64>,
    /// `None` plays across all categories
    pub category: Option<i64>,
}

/// Validate a quiz body
pub fn parse_quiz(body: Option<&Value>) -> RestResult<QuizRequest> {
    let body = body.ok_or_else(|| RestError::BadRequest("missing body".to_string()))?;

    let previous = match body.get("previous_questions") {
        None | Some(Value::Null) => {
            return Err(RestError::BadRequest("missing previous_questions".to_string()))
        }
        Some(value) => value,
    };
    let quiz_category = match body.get("quiz_category") {
        None | Some(Value::Null) => {
            return Err(RestError::BadRequest("missing quiz_category".to_string()))
        }
        Some(value) => value,
    };

    let previous_questions = previous
        .as_array()
        .ok_or_else(|| RestError::BadRequest("previous_questions must be a list".to_string()))?
        .iter()
        .map(|id| {
            coerce_int(id).ok_or_else(|| {
                RestError::BadRequest(format!("invalid question id in previous_questions: {id}"))
            })
        })
        .collect::<RestResult<Vec<i64>>>()?;

    let category_id = quiz_category
        .get("id")
        .and_then(coerce_int)
        .ok_or_else(|| RestError::BadRequest("quiz_category.id must be an integer".to_string()))?;

    Ok(QuizRequest {
        previous_questions,
        category: (category_id != 0).then_some(category_id),
    })
}
