use crate::utils::html::render_html;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Right panel: waiting indicator while a run is in flight, the rendered
/// manual once one exists, otherwise the getting-started placeholder.
/// While loading, the previous run's content is already gone and the fresh
/// manual is held back until the run settles.
pub fn draw_manual_panel(
    f: &mut Frame,
    manual: Option<&str>,
    loading: bool,
    scroll: u16,
    area: Rect,
) {
    if loading {
        let waiting = Paragraph::new("Waiting for the manual to be generated…")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Manual"));
        f.render_widget(waiting, area);
        return;
    }

    match manual {
        Some(markup) => {
            let text = Text::from(render_html(markup));
            let body = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .scroll((scroll, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Generated Manual  (PgUp/PgDn scroll)"),
                );
            f.render_widget(body, area);
        }
        None => {
            let placeholder = Paragraph::new(
                "Please select at least two PDF or TXT files and enter your prompt on the left \
                 to generate a manual.",
            )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Manual"));
            f.render_widget(placeholder, area);
        }
    }
}
