//! trivia - REST API backing a trivia game
//!
//! Layers, bottom up:
//! - `store`: question/category persistence behind the `QuestionStore` trait
//! - `rest_api`: pagination, request parsing and the seven endpoint operations
//! - `http_server`: axum routing, headers, tracing and the listener
//! - `cli`: `init` and `start` commands

pub mod cli;
pub mod http_server;
pub mod rest_api;
pub mod store;
