//! Round-by-round game flow.
//!
//! A [`Game`] walks through a [`QuestionBank`] one question at a time. Each
//! question goes `QuestionRead -> Buzzed -> AnswerChecked`, then `next()`
//! moves on. The first lightning-round question pauses the game until a
//! category is chosen; the chosen block plus the final quarter replace the
//! remaining questions.

use tracing::debug;

use super::grading::{check_answer, power_after, select_category, starting_power, CATEGORY_SIZE};
use super::types::{Question, QuestionBank, QuestionStatus};
use crate::error::QuizError;

/// Seconds on the lightning-round clock.
pub const LIGHTNING_SECONDS: u64 = 60;

/// Result of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the answer was accepted.
    pub correct: bool,
    /// Points awarded (zero when wrong).
    pub points: u32,
    /// The expected answer, hint included.
    pub expected: String,
}

/// State of one game.
#[derive(Debug, Clone)]
pub struct Game {
    questions: Vec<Question>,
    categories: Vec<String>,
    index: usize,
    status: QuestionStatus,
    score: u32,
    power: u32,
    revealed: usize,
    category_chosen: bool,
    paused: bool,
    finished: bool,
    lightning_active: bool,
    lightning_checked: u32,
    /// Where `next()` goes when it is not simply the following question.
    next_index: Option<usize>,
}

impl Game {
    /// Start a game on the first question of `bank`.
    pub fn new(bank: QuestionBank) -> Result<Self, QuizError> {
        if bank.questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let mut game = Self {
            questions: bank.questions,
            categories: bank.categories,
            index: 0,
            status: QuestionStatus::QuestionRead,
            score: 0,
            power: 0,
            revealed: 0,
            category_chosen: false,
            paused: false,
            finished: false,
            lightning_active: false,
            lightning_checked: 0,
            next_index: None,
        };
        game.display();
        Ok(game)
    }

    /// Question on screen, if the game is still running.
    pub fn current(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Header for the question on screen.
    pub fn header(&self) -> Option<String> {
        self.current().map(|q| q.header(self.index))
    }

    /// Portion of the question read out so far.
    pub fn revealed_text(&self) -> String {
        self.current()
            .map(|q| q.question.chars().take(self.revealed).collect())
            .unwrap_or_default()
    }

    /// Whether the whole question has been read out.
    pub fn reading_done(&self) -> bool {
        self.current()
            .map_or(true, |q| self.revealed >= q.question.chars().count())
    }

    pub fn status(&self) -> QuestionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points the current question is worth right now.
    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Waiting for a lightning-round category.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.finished
    }

    /// Whether the lightning-round clock is running.
    pub fn lightning_active(&self) -> bool {
        self.lightning_active
    }

    /// Read out up to `count` more characters. Returns the total revealed.
    pub fn reveal(&mut self, count: usize) -> Result<usize, QuizError> {
        self.ensure_playing()?;
        self.ensure_status("reveal", QuestionStatus::QuestionRead)?;

        let question = &self.questions[self.index];
        for c in question.question.chars().skip(self.revealed).take(count) {
            self.power = power_after(question, self.power, c);
            self.revealed += 1;
        }
        Ok(self.revealed)
    }

    /// Buzz in to answer.
    pub fn buzz(&mut self) -> Result<(), QuizError> {
        self.ensure_playing()?;
        self.ensure_status("buzz", QuestionStatus::QuestionRead)?;
        self.status = QuestionStatus::Buzzed;
        Ok(())
    }

    /// Submit an answer after buzzing.
    pub fn submit(&mut self, answer: &str) -> Result<Verdict, QuizError> {
        self.ensure_playing()?;
        self.ensure_status("submit", QuestionStatus::Buzzed)?;
        Ok(self.grade(answer))
    }

    /// Give up on the question being read. Ignored once someone buzzed.
    pub fn give_up(&mut self) -> Result<Option<Verdict>, QuizError> {
        self.ensure_playing()?;
        match self.status {
            QuestionStatus::Buzzed => Ok(None),
            QuestionStatus::QuestionRead => {
                self.status = QuestionStatus::Buzzed;
                Ok(Some(self.grade("")))
            }
            status @ QuestionStatus::AnswerChecked => Err(QuizError::InvalidTransition {
                action: "give up",
                status,
            }),
        }
    }

    /// Move to the next question once the current one is graded.
    pub fn next(&mut self) -> Result<(), QuizError> {
        self.ensure_playing()?;
        self.ensure_status("advance", QuestionStatus::AnswerChecked)?;

        self.index = self.next_index.take().unwrap_or(self.index + 1);
        if self.index >= self.questions.len() {
            debug!(score = self.score, "Game over");
            self.finished = true;
            return Ok(());
        }
        self.display();
        Ok(())
    }

    /// Pick the lightning-round category and resume play.
    pub fn choose_category(&mut self, index: usize) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::GameOver);
        }
        if !self.paused {
            return Err(QuizError::NoCategoryPending);
        }
        if index >= self.categories.len() {
            return Err(QuizError::UnknownCategory {
                index,
                available: self.categories.len(),
            });
        }

        self.questions = select_category(&self.questions, index);
        self.index = 0;
        self.next_index = None;
        self.paused = false;
        debug!(
            category = %self.categories[index],
            remaining = self.questions.len(),
            "Lightning-round category chosen"
        );

        if self.questions.is_empty() {
            self.finished = true;
        } else {
            self.display();
        }
        Ok(())
    }

    /// The lightning-round clock ran out: grade what is on screen, and make
    /// `next()` skip the rest of the category block.
    pub fn expire_lightning_round(&mut self, answer: &str) -> Result<Option<Verdict>, QuizError> {
        self.ensure_playing()?;
        if !self.lightning_active {
            return Err(QuizError::InvalidTransition {
                action: "expire the lightning round",
                status: self.status,
            });
        }
        self.lightning_active = false;

        let verdict = match self.status {
            QuestionStatus::AnswerChecked => None,
            _ => {
                self.status = QuestionStatus::Buzzed;
                Some(self.grade(answer))
            }
        };

        let last_lightning = self
            .questions
            .iter()
            .rposition(|q| q.quarter == Question::LIGHTNING_QUARTER);
        if let Some(last) = last_lightning.filter(|&last| last > self.index) {
            self.next_index = Some(last + 1);
        }
        Ok(verdict)
    }

    fn ensure_playing(&self) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::GameOver);
        }
        if self.paused {
            return Err(QuizError::Paused);
        }
        Ok(())
    }

    fn ensure_status(&self, action: &'static str, expected: QuestionStatus) -> Result<(), QuizError> {
        if self.status != expected {
            return Err(QuizError::InvalidTransition {
                action,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Put the question at `index` on screen.
    fn display(&mut self) {
        let question = &self.questions[self.index];
        let quarter = question.quarter;

        if quarter == Question::LIGHTNING_QUARTER && !self.category_chosen {
            self.category_chosen = true;
            if !self.categories.is_empty() {
                self.paused = true;
                return;
            }
        }

        self.status = QuestionStatus::QuestionRead;
        self.revealed = 0;
        self.power = starting_power(question);

        if quarter == Question::LIGHTNING_QUARTER && self.lightning_checked == 0 && !self.lightning_active {
            self.lightning_active = true;
        }
    }

    fn grade(&mut self, answer: &str) -> Verdict {
        let question = &self.questions[self.index];
        let correct = check_answer(answer, &question.answer);
        let points = if correct { self.power } else { 0 };
        let expected = question.answer.clone();
        let quarter = question.quarter;
        let tossup = question.is_tossup();

        self.status = QuestionStatus::AnswerChecked;
        self.score += points;

        if !correct && tossup {
            // missed toss-up forfeits its bonus
            self.next_index = Some(self.index + 2);
        }

        if quarter == Question::LIGHTNING_QUARTER {
            self.lightning_checked += 1;
            if self.lightning_checked >= CATEGORY_SIZE {
                self.lightning_active = false;
            }
        }

        debug!(correct, points, score = self.score, "Answer graded");
        Verdict {
            correct,
            points,
            expected,
        }
    }
}
