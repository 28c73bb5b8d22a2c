//! # Trivia HTTP Server Module
//!
//! axum front end for the trivia API.
//!
//! # Endpoints
//!
//! - `GET /categories`
//! - `GET /categories/:id/questions`
//! - `GET|POST /questions`
//! - `POST /questions/search`
//! - `DELETE /questions/:id`
//! - `POST /quizzes`

pub mod config;
pub mod server;
pub mod trivia_routes;

pub use config::{ConfigError, ServerConfig};
pub use server::HttpServer;
