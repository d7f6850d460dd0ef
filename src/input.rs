use crate::app::App;
use crate::models::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route one key event to the focused component. Global keys first, then
/// per-panel handling.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_focus();
            return;
        }
        KeyCode::PageUp => {
            app.scroll_manual_up();
            return;
        }
        KeyCode::PageDown => {
            app.scroll_manual_down();
            return;
        }
        _ => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('g') {
        app.submit_form();
        return;
    }

    match app.focus {
        Focus::Files => handle_files_key(app, key),
        Focus::Prompt => handle_prompt_key(app, key),
        Focus::Quiz => handle_quiz_key(app, key),
    }
}

fn handle_files_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.upload.move_cursor_up(),
        KeyCode::Down => app.upload.move_cursor_down(),
        KeyCode::Char(' ') => app.upload.toggle_current(),
        KeyCode::Enter => app.submit_form(),
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.upload.delete_prompt_char(),
        KeyCode::Left => app.upload.prompt_cursor_left(),
        KeyCode::Right => app.upload.prompt_cursor_right(),
        KeyCode::Char(c) => app.upload.insert_prompt_char(c),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    let Some(session) = app.quiz.as_mut() else {
        return;
    };
    if session.finished {
        // Terminal state: the score stays up, input is ignored.
        return;
    }

    match key.code {
        KeyCode::Up => {
            if session.cursor > 0 {
                session.cursor -= 1;
            }
        }
        KeyCode::Down => {
            let max = session.current().answers.len().saturating_sub(1);
            if session.cursor < max {
                session.cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            let cursor = session.cursor;
            session.toggle_answer(cursor);
        }
        KeyCode::Enter => session.advance(),
        _ => {}
    }
}
