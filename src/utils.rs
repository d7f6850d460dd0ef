pub mod html;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten a string to at most `max_len` characters, ellipsized. Counts
/// chars rather than bytes so multi-byte input never splits mid-character.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Simulate how text wraps with trimming (matching ratatui Wrap { trim: true }).
/// Returns (line_text, start_index, end_index) per visual line.
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut line_start_idx = 0;

    for (char_idx, ch) in text.char_indices() {
        if ch == '\n' {
            let trimmed = current_line.trim_end().to_string();
            lines.push((trimmed, line_start_idx, char_idx));

            current_line = String::new();
            current_width = 0;
            line_start_idx = char_idx + 1;
        } else {
            let char_width = ch.width().unwrap_or(1);

            if current_width + char_width > max_width && current_width > 0 {
                let trimmed = current_line.trim_end().to_string();
                lines.push((trimmed, line_start_idx, char_idx));

                current_line = ch.to_string();
                current_width = char_width;
                line_start_idx = char_idx;
            } else {
                current_line.push(ch);
                current_width += char_width;
            }
        }
    }

    if !current_line.is_empty() || text.ends_with('\n') {
        let trimmed = current_line.trim_end().to_string();
        lines.push((trimmed, line_start_idx, text.len()));
    }

    lines
}

/// Calculate the (line, column) position of a cursor within wrapped text,
/// used to place the terminal cursor inside the prompt input.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 {
        return (0, 0);
    }

    let wrapped_lines = simulate_wrapped_lines(text, max_width);

    for (line_idx, (_, start_idx, end_idx)) in wrapped_lines.iter().enumerate() {
        if cursor_index >= *start_idx && cursor_index <= *end_idx {
            // Terminal column, so display width, not byte offset.
            let col_in_line = text[*start_idx..cursor_index].width();
            return (line_idx, col_in_line);
        }
    }

    // Cursor beyond the last line or in trimmed space: clamp to line end.
    if let Some((last_text, _, last_end)) = wrapped_lines.last() {
        if cursor_index >= *last_end {
            let last_line_idx = wrapped_lines.len().saturating_sub(1);
            return (last_line_idx, last_text.width());
        }
    }

    (0, 0)
}
