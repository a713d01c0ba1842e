//! Quiz-bowl rules.
//!
//! This module handles:
//! - Question and question-bank types, including the bank file format
//! - Answer grading and scoring power
//! - Lightning-round category selection
//! - The per-question game state machine

pub mod game;
pub mod grading;
pub mod types;

pub use game::{Game, Verdict, LIGHTNING_SECONDS};
pub use grading::{check_answer, power_at, select_category};
pub use types::{Question, QuestionBank, QuestionStatus};
