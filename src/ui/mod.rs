pub mod layout;
mod manual;
mod quiz;
mod upload;

pub use layout::{calculate_form_chunks, calculate_left_chunks, calculate_page_chunks, calculate_quiz_chunks};
pub use manual::draw_manual_panel;
pub use quiz::draw_quiz_panel;
pub use upload::{draw_message, draw_upload_form};

use crate::app::App;
use crate::models::Focus;
use ratatui::Frame;

/// Draw the whole page from the orchestrator's state.
pub fn draw(f: &mut Frame, app: &App) {
    let page = calculate_page_chunks(f.area());
    let left = calculate_left_chunks(page.left);

    draw_upload_form(f, &app.upload, app.focus, app.loading, left.form_area);
    draw_message(
        f,
        app.upload.notice.as_deref(),
        app.error.as_deref(),
        left.message_area,
    );

    if let Some(session) = &app.quiz {
        draw_quiz_panel(f, session, app.focus == Focus::Quiz, left.quiz_area);
    }

    draw_manual_panel(
        f,
        app.manual.as_deref(),
        app.loading,
        app.manual_scroll,
        page.right,
    );
}
