//! # Trivia REST API
//!
//! Operations behind the trivia endpoints: body parsing, pagination,
//! response shapes and the error envelope. Only `errors` touches axum, to
//! render the envelope as a response.

pub mod errors;
pub mod handler;
pub mod pagination;
pub mod parser;
pub mod response;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::TriviaHandler;
pub use pagination::{page_param, paginate, QUESTIONS_PER_PAGE};
pub use parser::{parse_body, QuizRequest};
