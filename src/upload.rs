use std::path::PathBuf;

/// State of the upload form: the scanned document list with per-file toggle
/// marks, the prompt line, and a validation notice. Fields are not cleared
/// after a submission; the caller decides when to rescan or reset.
#[derive(Debug)]
pub struct UploadForm {
    pub available: Vec<PathBuf>,
    pub marked: Vec<bool>,
    pub cursor: usize,
    pub prompt: String,
    pub prompt_cursor: usize,
    pub notice: Option<String>,
}

impl UploadForm {
    pub fn new(available: Vec<PathBuf>) -> Self {
        let marked = vec![false; available.len()];
        Self {
            available,
            marked,
            cursor: 0,
            prompt: String::new(),
            prompt_cursor: 0,
            notice: None,
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.available.len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    /// Toggle the file under the cursor in or out of the selection.
    pub fn toggle_current(&mut self) {
        if let Some(mark) = self.marked.get_mut(self.cursor) {
            *mark = !*mark;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    pub fn selected_files(&self) -> Vec<PathBuf> {
        self.available
            .iter()
            .zip(&self.marked)
            .filter(|&(_, &m)| m)
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn insert_prompt_char(&mut self, c: char) {
        self.prompt.insert(self.prompt_cursor, c);
        self.prompt_cursor += c.len_utf8();
    }

    pub fn delete_prompt_char(&mut self) {
        if self.prompt_cursor > 0 {
            // Step back over one char, which may be multi-byte.
            let prev = self.prompt[..self.prompt_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.prompt.remove(prev);
            self.prompt_cursor = prev;
        }
    }

    pub fn prompt_cursor_left(&mut self) {
        if self.prompt_cursor > 0 {
            self.prompt_cursor = self.prompt[..self.prompt_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn prompt_cursor_right(&mut self) {
        if self.prompt_cursor < self.prompt.len() {
            self.prompt_cursor = self.prompt[self.prompt_cursor..]
                .chars()
                .next()
                .map(|c| self.prompt_cursor + c.len_utf8())
                .unwrap_or(self.prompt.len());
        }
    }

    /// Validate and produce the submission snapshot. Fewer than 2 marked
    /// files sets a notice and yields nothing; the generation request is
    /// never fired in that case.
    pub fn submit(&mut self) -> Option<(Vec<PathBuf>, String)> {
        let files = self.selected_files();
        if files.len() < 2 {
            self.notice = Some("Please upload at least 2 documents.".to_string());
            return None;
        }
        self.notice = None;
        Some((files, self.prompt.clone()))
    }
}
