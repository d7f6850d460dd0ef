use crate::quiz::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz_panel(f: &mut Frame, session: &QuizSession, focused: bool, area: Rect) {
    if session.finished {
        draw_score(f, session, area);
        return;
    }

    let layout = calculate_quiz_chunks(area);

    let progress = format!(
        "Question {} of {}",
        session.current_index + 1,
        session.total()
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quiz Time"));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(Text::from(session.current().question.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let multi = session.current().is_multi();
    let items: Vec<ListItem> = session
        .current()
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let mark = match (multi, session.is_selected(i)) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(•)",
                (false, false) => "( )",
            };
            let style = if i == session.cursor && focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", mark, answer)).style(style)
        })
        .collect();

    let answers_title = if multi {
        "Answers (multiple apply)"
    } else {
        "Answers"
    };
    let answers = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(answers_title)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(answers, layout.answers_area);

    let submit_label = if session.on_last_question() {
        "Submit"
    } else {
        "Next"
    };
    let footer_line = if session.can_advance() {
        Line::from(vec![
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Toggle  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!(" {}", submit_label)),
        ])
    } else {
        // Progression stays disabled until something is selected.
        Line::from(Span::styled(
            format!("Enter {} (select an answer first)", submit_label),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ))
    };
    let footer = Paragraph::new(footer_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, layout.footer_area);
}

fn draw_score(f: &mut Frame, session: &QuizSession, area: Rect) {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "Your Score",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!(
        "{} of {} correct",
        session.score,
        session.total()
    )));

    let score = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quiz"));
    f.render_widget(score, area);
}
