use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Two-column page: upload form + quiz on the left, manual on the right.
pub struct PageLayout {
    pub left: Rect,
    pub right: Rect,
}

pub struct LeftLayout {
    pub form_area: Rect,
    pub message_area: Rect,
    pub quiz_area: Rect,
}

pub struct FormLayout {
    pub files_area: Rect,
    pub prompt_area: Rect,
    pub button_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answers_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_page_chunks(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    PageLayout {
        left: chunks[0],
        right: chunks[1],
    }
}

pub fn calculate_left_chunks(area: Rect) -> LeftLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    LeftLayout {
        form_area: chunks[0],
        message_area: chunks[1],
        quiz_area: chunks[2],
    }
}

pub fn calculate_form_chunks(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    FormLayout {
        files_area: chunks[0],
        prompt_area: chunks[1],
        button_area: chunks[2],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(2),
            Constraint::Percentage(50),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answers_area: chunks[2],
        footer_area: chunks[3],
    }
}
