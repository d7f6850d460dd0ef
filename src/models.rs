use serde::Deserialize;
use std::path::PathBuf;

/// One quiz question as returned by the backend. Immutable once parsed.
///
/// `correct_answer` holds indices into `answers`; more than one index means
/// the question is multi-select.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: Vec<usize>,
}

impl QuizQuestion {
    pub fn is_multi(&self) -> bool {
        self.correct_answer.len() > 1
    }
}

/// A generation request handed to the worker: the immutable snapshot of the
/// upload form at submit time.
#[derive(Debug)]
pub enum GenerateJob {
    Generate { files: Vec<PathBuf>, prompt: String },
}

/// Outcomes reported back by the worker, in the order they happen.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Manual call succeeded; the quiz call follows.
    ManualReady { manual: String },
    /// Quiz call succeeded with the raw question list.
    QuizReady { questions: Vec<QuizQuestion> },
    /// Either call failed. The worker never issues the quiz call after a
    /// manual failure, so at most one Failed arrives per job.
    Failed { error: String },
}

/// Which part of the page currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Files,
    Prompt,
    Quiz,
}
