//! Thread and comment data, plus the widget-local draft buffer.
//!
//! `CommentThread` and `Comment` mirror the backing store's records; the
//! widget holds a local copy and reconciles it on every store
//! notification. `DraftEditor` is the only state the widget truly owns.

use serde::{Deserialize, Serialize};

/// Expand/collapse state as reported by the comment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapsibleState {
    Expanded,
    Collapsed,
}

/// The line range a thread is anchored to (1-based lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRange {
    pub start_line: u32,
    pub end_line: u32,
    pub anchor_column: u32,
}

impl ThreadRange {
    #[must_use]
    pub const fn line(start_line: u32) -> Self {
        Self {
            start_line,
            end_line: start_line,
            anchor_column: 1,
        }
    }
}

/// A single comment in a thread. Immutable from the widget's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    /// Reference to the author's avatar image, if any.
    pub icon: Option<String>,
    pub body: String,
    /// Status label shown next to the author (e.g. "pending").
    pub label: Option<String>,
}

/// An anchored discussion thread, owned by the external comment store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    pub owner: String,
    pub thread_id: String,
    pub range: ThreadRange,
    pub label: Option<String>,
    pub collapsible_state: Option<CollapsibleState>,
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Absent collapsible state behaves as collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsible_state != Some(CollapsibleState::Expanded)
    }

    /// Heading label: the explicit label if set, else a participant
    /// summary, else a prompt to start the discussion.
    #[must_use]
    pub fn heading_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        if self.comments.is_empty() {
            return "Start discussion".to_string();
        }
        let mut participants: Vec<&str> = Vec::new();
        for comment in &self.comments {
            if !participants.contains(&comment.author.as_str()) {
                participants.push(&comment.author);
            }
        }
        let list: Vec<String> = participants.iter().map(|name| format!("@{name}")).collect();
        format!("Participants: {}", list.join(", "))
    }
}

/// In-overlay multi-line draft editor state.
#[derive(Debug, Clone)]
pub struct DraftEditor {
    /// Lines of text (always at least one).
    lines: Vec<String>,
    /// Cursor row (0-indexed into lines).
    cursor_row: usize,
    /// Cursor column (0-indexed, character position in current line).
    cursor_col: usize,
}

impl Default for DraftEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftEditor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// True when the buffer holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// The raw buffer contents, newline-joined.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// The submission body: buffer contents with surrounding whitespace
    /// trimmed.
    #[must_use]
    pub fn body(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }

    /// Reset to a single empty line.
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Append a string at the cursor position (single keystrokes arrive
    /// as one-char strings, paste as longer ones).
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.newline();
            } else {
                self.insert_char(c);
            }
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.insert(byte_idx, c);
        self.cursor_col += 1;
    }

    /// Insert a newline, splitting the current line.
    pub fn newline(&mut self) {
        let byte_idx = char_to_byte_index(&self.lines[self.cursor_row], self.cursor_col);
        let rest = self.lines[self.cursor_row][byte_idx..].to_string();
        self.lines[self.cursor_row].truncate(byte_idx);
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, rest);
        self.cursor_col = 0;
    }

    /// Delete the character before the cursor, merging lines at column 0.
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let start = char_to_byte_index(line, self.cursor_col - 1);
            let end = char_to_byte_index(line, self.cursor_col);
            line.drain(start..end);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].chars().count();
            self.lines[self.cursor_row].push_str(&current);
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.clamp_col();
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.clamp_col();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].chars().count();
        }
    }

    pub fn cursor_right(&mut self) {
        let line_len = self.lines[self.cursor_row].chars().count();
        if self.cursor_col < line_len {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub const fn home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn end(&mut self) {
        self.cursor_col = self.lines[self.cursor_row].chars().count();
    }

    /// Move cursor to the start of the previous word.
    pub fn word_left(&mut self) {
        if self.cursor_col == 0 {
            return;
        }
        let line = &self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let before = &line[..byte_idx];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .rfind(|c: char| c.is_whitespace())
            .map_or(0, |i| i + 1);
        self.cursor_col = before[..word_start].chars().count();
    }

    /// Move cursor past the end of the next word.
    pub fn word_right(&mut self) {
        let line = &self.lines[self.cursor_row];
        let line_len = line.chars().count();
        if self.cursor_col >= line_len {
            return;
        }
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let after = &line[byte_idx..];
        let skip_word = after
            .find(|c: char| c.is_whitespace())
            .unwrap_or(after.len());
        let rest = &after[skip_word..];
        let skip_space = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        self.cursor_col += after[..skip_word + skip_space].chars().count();
    }

    /// Delete the word before the cursor.
    pub fn delete_word(&mut self) {
        if self.cursor_col == 0 {
            return;
        }
        let line = &self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let before = &line[..byte_idx];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .rfind(|c: char| c.is_whitespace())
            .map_or(0, |i| i + 1);
        let new_col = before[..word_start].chars().count();
        let start_byte = char_to_byte_index(&self.lines[self.cursor_row], new_col);
        self.lines[self.cursor_row].drain(start_byte..byte_idx);
        self.cursor_col = new_col;
    }

    /// Clear from cursor to start of line.
    pub fn clear_line(&mut self) {
        let byte_idx = char_to_byte_index(&self.lines[self.cursor_row], self.cursor_col);
        self.lines[self.cursor_row].drain(..byte_idx);
        self.cursor_col = 0;
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn clamp_col(&mut self) {
        let line_len = self.lines[self.cursor_row].chars().count();
        if self.cursor_col > line_len {
            self.cursor_col = line_len;
        }
    }
}

/// Convert a character index to a byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, body: &str) -> Comment {
        Comment {
            author: author.to_string(),
            icon: None,
            body: body.to_string(),
            label: None,
        }
    }

    fn thread(comments: Vec<Comment>) -> CommentThread {
        CommentThread {
            owner: "review-provider".to_string(),
            thread_id: "t-1".to_string(),
            range: ThreadRange::line(42),
            label: None,
            collapsible_state: None,
            comments,
        }
    }

    #[test]
    fn absent_collapsible_state_behaves_as_collapsed() {
        let mut t = thread(Vec::new());
        assert!(t.is_collapsed());
        t.collapsible_state = Some(CollapsibleState::Collapsed);
        assert!(t.is_collapsed());
        t.collapsible_state = Some(CollapsibleState::Expanded);
        assert!(!t.is_collapsed());
    }

    #[test]
    fn heading_label_prefers_explicit_label() {
        let mut t = thread(vec![comment("ada", "hm")]);
        t.label = Some("Naming".to_string());
        assert_eq!(t.heading_label(), "Naming");
    }

    #[test]
    fn heading_label_lists_unique_participants_in_order() {
        let t = thread(vec![
            comment("ada", "first"),
            comment("grace", "second"),
            comment("ada", "third"),
        ]);
        assert_eq!(t.heading_label(), "Participants: @ada, @grace");
    }

    #[test]
    fn heading_label_for_empty_thread_prompts_discussion() {
        assert_eq!(thread(Vec::new()).heading_label(), "Start discussion");
    }

    #[test]
    fn draft_insert_and_newline_split_lines() {
        let mut draft = DraftEditor::new();
        draft.insert_str("hello world");
        draft.home();
        draft.word_right();
        draft.newline();
        assert_eq!(draft.text(), "hello \nworld");
        assert_eq!(draft.line_count(), 2);
    }

    #[test]
    fn draft_backspace_merges_lines_at_column_zero() {
        let mut draft = DraftEditor::new();
        draft.insert_str("ab\ncd");
        draft.home();
        draft.backspace();
        assert_eq!(draft.text(), "abcd");
    }

    #[test]
    fn draft_emptiness_tracks_raw_buffer() {
        let mut draft = DraftEditor::new();
        assert!(draft.is_empty());
        draft.insert_char('x');
        assert!(!draft.is_empty());
        draft.backspace();
        assert!(draft.is_empty());
        draft.newline();
        // Two empty lines still hold no text.
        assert!(draft.is_empty());
    }

    #[test]
    fn draft_word_ops_use_whitespace_boundaries() {
        let mut draft = DraftEditor::new();
        draft.insert_str("one two three");
        draft.delete_word();
        assert_eq!(draft.text(), "one two ");
        draft.clear_line();
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn draft_body_trims_surrounding_whitespace() {
        let mut draft = DraftEditor::new();
        draft.insert_str("  looks good  ");
        assert_eq!(draft.body(), "looks good");
        assert_eq!(draft.text(), "  looks good  ");
    }
}
