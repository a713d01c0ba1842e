//! Question and question-bank types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{QuizError, ServerError};

/// Status of the round for the question currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default)]
pub enum QuestionStatus {
    /// The question is being read; players may buzz or give up.
    #[default]
    QuestionRead,
    /// A player buzzed in and is typing an answer.
    Buzzed,
    /// The answer was graded; the round waits for "next".
    AnswerChecked,
}

/// A single quiz-bowl question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Quarter the question belongs to (1-4).
    pub quarter: u8,
    /// Question number, e.g. "1.3" or "3.12".
    pub number: String,
    /// Question text.
    pub question: String,
    /// Expected answer. Text from the first "(" on is an optional hint.
    pub answer: String,
}

impl Question {
    /// Timed quarter whose questions are picked by category.
    pub const LIGHTNING_QUARTER: u8 = 3;
    /// Final quarter, where power depends on how early the player buzzes.
    pub const POWER_QUARTER: u8 = 4;

    /// Integer after the dot in `number` ("3.12" -> 12).
    pub fn part(&self) -> Option<u32> {
        self.number.split('.').nth(1)?.trim().parse().ok()
    }

    /// Label shown to players: the number without its quarter prefix,
    /// or `position + 1` when that leaves nothing.
    pub fn label(&self, position: usize) -> String {
        let rest: String = self.number.chars().skip(2).collect();
        if rest.is_empty() {
            (position + 1).to_string()
        } else {
            rest
        }
    }

    /// Header line: "Quarter 2 - Question 5".
    pub fn header(&self, position: usize) -> String {
        format!("Quarter {} - Question {}", self.quarter, self.label(position))
    }

    /// A quarter 2 question with a short number like "2.1" is a toss-up;
    /// missing it forfeits the bonus that follows.
    pub fn is_tossup(&self) -> bool {
        self.quarter == 2 && self.number.chars().count() == 3
    }
}

/// On-disk bank format: either `{"questions": [...], "categories": [...]}`
/// or a bare array of questions.
#[derive(Deserialize)]
#[serde(untagged)]
enum BankFile {
    Full {
        questions: Vec<Question>,
        #[serde(default)]
        categories: Vec<String>,
    },
    Bare(Vec<Question>),
}

/// Questions for one game plus the third-quarter category names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Questions in play order.
    pub questions: Vec<Question>,
    /// Category names offered at the start of the third quarter.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl QuestionBank {
    /// Parse a bank from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ServerError> {
        let bank = match serde_json::from_str::<BankFile>(text)? {
            BankFile::Full {
                questions,
                categories,
            } => Self {
                questions,
                categories,
            },
            BankFile::Bare(questions) => Self {
                questions,
                categories: Vec::new(),
            },
        };
        Ok(bank)
    }

    /// Read and parse a bank file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check the bank can be played.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        for q in &self.questions {
            if !(1..=4).contains(&q.quarter) {
                return Err(QuizError::InvalidQuarter {
                    number: q.number.clone(),
                    quarter: q.quarter,
                });
            }
            if q.quarter == Question::LIGHTNING_QUARTER && q.part().is_none() {
                return Err(QuizError::MalformedNumber(q.number.clone()));
            }
        }

        Ok(())
    }

    /// Question count per quarter, index 0 is quarter 1.
    pub fn quarter_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for q in &self.questions {
            if let Some(slot) = counts.get_mut(usize::from(q.quarter).wrapping_sub(1)) {
                *slot += 1;
            }
        }
        counts
    }
}
