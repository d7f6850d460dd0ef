use crate::models::Focus;
use crate::ui::layout::calculate_form_chunks;
use crate::upload::UploadForm;
use crate::utils::{calculate_wrapped_cursor_position, truncate_string};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_upload_form(
    f: &mut Frame,
    form: &UploadForm,
    focus: Focus,
    loading: bool,
    area: Rect,
) {
    let layout = calculate_form_chunks(area);

    let files_focused = focus == Focus::Files;
    // Room left for a name after the borders and the "[x] " marker.
    let name_width = layout.files_area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = if form.available.is_empty() {
        vec![ListItem::new("No PDF or TXT documents found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        form.available
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let mark = if form.marked.get(i).copied().unwrap_or(false) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if i == form.cursor && files_focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{} {}", mark, truncate_string(&name, name_width)))
                    .style(style)
            })
            .collect()
    };

    let files_list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Documents (PDF or TXT)")
            .border_style(if files_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(files_list, layout.files_area);

    let prompt_focused = focus == Focus::Prompt;
    let prompt_text = if form.prompt.is_empty() && !prompt_focused {
        Line::from("E.g. Create a training manual on key points").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::from(form.prompt.as_str())
    };
    let prompt = Paragraph::new(prompt_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Prompt")
            .border_style(if prompt_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    f.render_widget(prompt, layout.prompt_area);

    if prompt_focused {
        let text_width = layout.prompt_area.width.saturating_sub(2) as usize;
        let (line, col) =
            calculate_wrapped_cursor_position(&form.prompt, form.prompt_cursor, text_width.max(1));
        f.set_cursor_position((
            layout.prompt_area.x + 1 + col as u16,
            layout.prompt_area.y + 1 + line as u16,
        ));
    }

    let (label, style) = if loading {
        (
            "Generating…",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )
    } else {
        (
            "Generate  (Ctrl+G)",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, layout.button_area);
}

/// One message slot under the form: the form's own validation notice wins,
/// otherwise the orchestrator's error for the current run.
pub fn draw_message(f: &mut Frame, notice: Option<&str>, error: Option<&str>, area: Rect) {
    let line = if let Some(notice) = notice {
        Line::from(notice.to_string()).style(Style::default().fg(Color::Yellow))
    } else if let Some(error) = error {
        Line::from(error.to_string()).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(line), area);
}
