use crate::logger;
use crate::models::{Focus, GenerateJob, GenerateOutcome};
use crate::quiz::QuizSession;
use crate::upload::UploadForm;
use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;

/// Top-level state. Owns the manual text, quiz questions, loading and error
/// flags; the quiz session itself runs independently once handed over and
/// is never mutated from here again.
pub struct App {
    pub upload: UploadForm,
    pub focus: Focus,
    pub manual: Option<String>,
    pub quiz: Option<QuizSession>,
    pub loading: bool,
    pub error: Option<String>,
    pub manual_scroll: u16,
    pub should_quit: bool,
    job_tx: Sender<GenerateJob>,
    outcome_rx: Receiver<GenerateOutcome>,
}

impl App {
    pub fn new(
        upload: UploadForm,
        job_tx: Sender<GenerateJob>,
        outcome_rx: Receiver<GenerateOutcome>,
    ) -> Self {
        Self {
            upload,
            focus: Focus::Files,
            manual: None,
            quiz: None,
            loading: false,
            error: None,
            manual_scroll: 0,
            should_quit: false,
            job_tx,
            outcome_rx,
        }
    }

    /// Kick off one generation run with the submitted snapshot. Clears all
    /// state from the previous run before anything goes over the wire.
    /// Ignored while a run is already in flight.
    pub fn start_generation(&mut self, files: Vec<PathBuf>, prompt: String) {
        if self.loading {
            return;
        }

        self.manual = None;
        self.quiz = None;
        self.error = None;
        self.manual_scroll = 0;
        self.loading = true;

        logger::log(&format!(
            "Starting generation with {} files, prompt {:?}",
            files.len(),
            prompt
        ));
        if self.job_tx.send(GenerateJob::Generate { files, prompt }).is_err() {
            self.loading = false;
            self.error = Some("generation worker is gone".to_string());
        }
    }

    /// Drain any outcomes the worker has produced since the last tick.
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: GenerateOutcome) {
        match outcome {
            GenerateOutcome::ManualReady { manual } => {
                // The quiz call is still running; loading stays on until
                // its outcome arrives.
                self.manual = Some(manual);
            }
            GenerateOutcome::QuizReady { questions } => {
                match QuizSession::new(questions) {
                    Ok(session) => {
                        self.quiz = Some(session);
                        self.focus = Focus::Quiz;
                    }
                    Err(e) => {
                        logger::log(&format!("Rejected quiz payload: {}", e));
                        self.error = Some(format!("malformed quiz: {}", e));
                    }
                }
                self.loading = false;
            }
            GenerateOutcome::Failed { error } => {
                self.error = Some(error);
                self.loading = false;
            }
        }
    }

    /// Submit the upload form: validation happens in the form, the
    /// generation fires here, exactly once per accepted submission.
    pub fn submit_form(&mut self) {
        if self.loading {
            return;
        }
        if let Some((files, prompt)) = self.upload.submit() {
            self.start_generation(files, prompt);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Files => Focus::Prompt,
            Focus::Prompt => {
                if self.quiz.is_some() {
                    Focus::Quiz
                } else {
                    Focus::Files
                }
            }
            Focus::Quiz => Focus::Files,
        };
    }

    pub fn scroll_manual_up(&mut self) {
        self.manual_scroll = self.manual_scroll.saturating_sub(1);
    }

    pub fn scroll_manual_down(&mut self) {
        self.manual_scroll = self.manual_scroll.saturating_add(1);
    }
}
