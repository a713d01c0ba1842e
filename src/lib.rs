//! FalconBowl quiz-bowl backend.
//!
//! The HTTP side is deliberately small: a greeting at `/` for health checks
//! and a placeholder `/questions` list, both behind a cross-origin policy
//! that lets the browser game client call them from anywhere.
//!
//! ```text
//! GET /           -> {"Hello": "World"}
//! GET /questions  -> {"questions": []}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router, handlers and OpenAPI document
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`quiz`]: Question banks, grading and game flow
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod quiz;
pub mod utils;

pub use config::Config;
pub use error::{QuizError, Result, ServerError};
