use crate::app::App;
use crate::models::{Focus, GenerateJob, GenerateOutcome, QuizQuestion};
use crate::quiz::QuizSession;
use crate::ui;
use crate::upload::UploadForm;
use crossbeam_channel::{unbounded, Receiver, Sender};
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;

fn test_app() -> (App, Receiver<GenerateJob>, Sender<GenerateOutcome>) {
    let (job_tx, job_rx) = unbounded();
    let (outcome_tx, outcome_rx) = unbounded();
    let form = UploadForm::new(vec![PathBuf::from("a.pdf"), PathBuf::from("b.txt")]);
    (App::new(form, job_tx, outcome_rx), job_rx, outcome_tx)
}

fn questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            question: "What color is the sky?".to_string(),
            answers: vec!["blue".to_string(), "green".to_string()],
            correct_answer: vec![0],
        },
        QuizQuestion {
            question: "Pick the even numbers".to_string(),
            answers: vec!["2".to_string(), "3".to_string(), "4".to_string()],
            correct_answer: vec![0, 2],
        },
    ]
}

/// Render the whole page into a plain string, one row per line, so tests
/// can assert on visible text without caring about layout coordinates.
fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut text = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        if i > 0 && i % width == 0 {
            text.push('\n');
        }
        text.push_str(cell.symbol());
    }
    text
}

#[test]
fn test_idle_page_shows_placeholder_and_form() {
    let (app, _job_rx, _outcome_tx) = test_app();
    let screen = render(&app);

    assert!(screen.contains("a.pdf"));
    assert!(screen.contains("b.txt"));
    assert!(screen.contains("Generate"));
    assert!(screen.contains("Please select at least two PDF or TXT files"));
}

#[test]
fn test_loading_shows_waiting_indicator() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    app.start_generation(
        vec![PathBuf::from("a.pdf"), PathBuf::from("b.txt")],
        "p".into(),
    );
    let screen = render(&app);

    assert!(screen.contains("Waiting for the manual to be generated"));
    assert!(screen.contains("Generating"));
    assert!(!screen.contains("Generated Manual"));
}

#[test]
fn test_manual_held_back_while_still_loading() {
    let (mut app, _job_rx, outcome_tx) = test_app();
    app.start_generation(
        vec![PathBuf::from("a.pdf"), PathBuf::from("b.txt")],
        "p".into(),
    );
    outcome_tx
        .send(GenerateOutcome::ManualReady {
            manual: "<h1>Forklift Manual</h1>".to_string(),
        })
        .unwrap();
    app.poll_outcomes();
    let screen = render(&app);

    // The quiz call is still in flight, so the waiting indication wins.
    assert!(screen.contains("Waiting for the manual to be generated"));
    assert!(!screen.contains("Forklift Manual"));
}

#[test]
fn test_manual_rendered_as_styled_text() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    app.manual = Some("<h1>Forklift Manual</h1><p>Drive <b>slowly</b>.</p>".to_string());
    let screen = render(&app);

    assert!(screen.contains("Generated Manual"));
    assert!(screen.contains("Forklift Manual"));
    assert!(screen.contains("Drive slowly."));
    assert!(!screen.contains("<h1>"));
}

#[test]
fn test_quiz_progress_and_disabled_next() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    app.quiz = Some(QuizSession::new(questions()).unwrap());
    app.focus = Focus::Quiz;
    let screen = render(&app);

    assert!(screen.contains("Question 1 of 2"));
    assert!(screen.contains("What color is the sky?"));
    assert!(screen.contains("( ) blue"));
    assert!(screen.contains("( ) green"));
    assert!(screen.contains("select an answer first"));
    assert!(screen.contains("Next"));
}

#[test]
fn test_quiz_selection_marks_and_enabled_control() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    let mut session = QuizSession::new(questions()).unwrap();
    session.toggle_answer(0);
    app.quiz = Some(session);
    app.focus = Focus::Quiz;
    let screen = render(&app);

    assert!(screen.contains("(•) blue"));
    assert!(screen.contains("( ) green"));
    assert!(!screen.contains("select an answer first"));
}

#[test]
fn test_last_question_reads_submit_with_checkboxes() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    let mut session = QuizSession::new(questions()).unwrap();
    session.toggle_answer(0);
    session.advance();
    app.quiz = Some(session);
    app.focus = Focus::Quiz;
    let screen = render(&app);

    assert!(screen.contains("Question 2 of 2"));
    assert!(screen.contains("multiple apply"));
    assert!(screen.contains("[ ] 2"));
    assert!(screen.contains("Submit"));
    assert!(!screen.contains("Next"));
}

#[test]
fn test_completed_quiz_shows_only_the_score() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    let mut session = QuizSession::new(questions()).unwrap();
    session.toggle_answer(0);
    session.advance();
    session.toggle_answer(0);
    session.advance();
    app.quiz = Some(session);
    let screen = render(&app);

    assert!(screen.contains("Your Score"));
    assert!(screen.contains("1 of 2 correct"));
    assert!(!screen.contains("Question 2 of 2"));
    assert!(!screen.contains("Submit"));
}

#[test]
fn test_single_question_score_reads_one_of_one() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    let mut session = QuizSession::new(vec![QuizQuestion {
        question: "Only one".to_string(),
        answers: vec!["a".to_string(), "b".to_string()],
        correct_answer: vec![0],
    }])
    .unwrap();
    session.toggle_answer(0);
    session.advance();
    app.quiz = Some(session);
    let screen = render(&app);

    assert!(screen.contains("Your Score"));
    assert!(screen.contains("1 of 1 correct"));
    assert!(!screen.contains("Only one"));
}

#[test]
fn test_long_file_name_is_ellipsized() {
    let (job_tx, _job_rx) = unbounded();
    let (_outcome_tx, outcome_rx) = unbounded();
    let long = "a-very-long-document-name-that-cannot-possibly-fit-the-list.pdf";
    let form = UploadForm::new(vec![PathBuf::from(long), PathBuf::from("b.txt")]);
    let app = App::new(form, job_tx, outcome_rx);
    let screen = render(&app);

    assert!(screen.contains("..."));
    assert!(!screen.contains(long));
    assert!(screen.contains("b.txt"));
}

#[test]
fn test_failure_message_is_shown() {
    let (mut app, _job_rx, outcome_tx) = test_app();
    app.loading = true;
    outcome_tx
        .send(GenerateOutcome::Failed {
            error: "bad file".to_string(),
        })
        .unwrap();
    app.poll_outcomes();
    let screen = render(&app);

    assert!(screen.contains("bad file"));
}

#[test]
fn test_validation_notice_is_shown() {
    let (mut app, _job_rx, _outcome_tx) = test_app();
    app.upload.toggle_current(); // only one file marked
    app.submit_form();
    let screen = render(&app);

    assert!(screen.contains("Please upload at least 2 documents."));
    assert!(!app.loading);
}
