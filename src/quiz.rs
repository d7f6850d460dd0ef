use crate::models::QuizQuestion;

/// Interactive quiz state. Owns its questions for the lifetime of one run;
/// the orchestrator hands them over once and never touches them again.
///
/// `current_index` only moves forward, one question at a time. Once
/// `finished` is set the session is terminal and ignores all input.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub selected: Vec<usize>,
    pub score: usize,
    pub finished: bool,
    /// Highlighted answer row, for keyboard navigation only.
    pub cursor: usize,
}

impl QuizSession {
    /// Build a session from a backend payload, rejecting malformed input:
    /// an empty question list, a question with no answers, or a
    /// `correctAnswer` set that is empty or references a missing answer.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, String> {
        if questions.is_empty() {
            return Err("quiz payload contains no questions".to_string());
        }
        for (i, q) in questions.iter().enumerate() {
            if q.answers.is_empty() {
                return Err(format!("question {} has no answer choices", i + 1));
            }
            if q.correct_answer.is_empty() {
                return Err(format!("question {} has no correct answer", i + 1));
            }
            if let Some(&bad) = q.correct_answer.iter().find(|&&a| a >= q.answers.len()) {
                return Err(format!(
                    "question {} marks answer {} correct but only has {} choices",
                    i + 1,
                    bad,
                    q.answers.len()
                ));
            }
        }
        Ok(Self {
            questions,
            current_index: 0,
            selected: Vec::new(),
            score: 0,
            finished: false,
            cursor: 0,
        })
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Whether the current question is on its last position, i.e. the
    /// submit control reads "Submit" instead of "Next".
    pub fn on_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Toggle an answer choice. Multi-select questions use symmetric
    /// difference; single-select questions replace the whole selection.
    pub fn toggle_answer(&mut self, index: usize) {
        if self.finished {
            return;
        }
        if self.current().is_multi() {
            if let Some(pos) = self.selected.iter().position(|&i| i == index) {
                self.selected.remove(pos);
            } else {
                self.selected.push(index);
            }
        } else {
            self.selected.clear();
            self.selected.push(index);
        }
    }

    /// The submit control is enabled only when something is selected.
    pub fn can_advance(&self) -> bool {
        !self.finished && !self.selected.is_empty()
    }

    /// Evaluate the current selection and move on. Correct means the
    /// selection, sorted, matches the question's correct set, sorted
    /// (set equality). A no-op while nothing is selected or after the
    /// session finished.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }

        let mut sorted_selected = self.selected.clone();
        sorted_selected.sort_unstable();
        let mut sorted_correct = self.current().correct_answer.clone();
        sorted_correct.sort_unstable();
        if sorted_selected == sorted_correct {
            self.score += 1;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected.clear();
            self.cursor = 0;
        } else {
            self.finished = true;
        }
    }
}
