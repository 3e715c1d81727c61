use crate::document::{snap_to_char_boundary, Document, Position};

/// The visible window onto the document.
///
/// `height` includes the status row, so only `height - 1` rows show text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub row_offset: usize,
    /// Kept for bookkeeping; long lines are truncated, not scrolled.
    pub col_offset: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Number of rows available for text (everything but the status row).
    pub fn text_rows(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }
}

/// Cursor position plus the scroll window it is kept inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorViewport {
    pub cursor: Position,
    pub viewport: Viewport,
}

impl CursorViewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cursor: Position::default(),
            viewport: Viewport::new(width, height),
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.viewport.width = width.max(1);
        self.viewport.height = height.max(1);
    }

    /// Back to the top-left of the document.
    pub fn reset(&mut self) {
        self.cursor = Position::default();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
    }

    /// Pull the cursor column back inside the current line.
    ///
    /// Below the content the column is always 0.
    pub fn clamp_to_line(&mut self, doc: &Document) {
        match doc.line(self.cursor.row) {
            None => self.cursor.col = 0,
            Some(line) => {
                self.cursor.col = snap_to_char_boundary(line, self.cursor.col);
            }
        }
    }

    /// Pull the cursor column back inside the current line and the screen.
    pub fn clamp_to_document(&mut self, doc: &Document) {
        self.clamp_to_line(doc);
        let max_col = self.viewport.width.saturating_sub(1);
        if self.cursor.col > max_col {
            self.cursor.col = max_col;
        }
    }

    /// Scroll by the minimum amount that keeps the cursor row visible.
    pub fn scroll_for_cursor(&mut self) {
        let rows = self.viewport.text_rows();
        let row = self.cursor.row;
        if row < self.viewport.row_offset {
            self.viewport.row_offset = row;
        } else if row >= self.viewport.row_offset + rows {
            self.viewport.row_offset = row + 1 - rows;
        }
    }

    // ── Movement ─────────────────────────────────────────────────────

    /// One step left; no-op at column 0.
    pub fn move_left(&mut self, doc: &Document) -> bool {
        if self.cursor.col == 0 {
            return false;
        }
        self.cursor.col = match doc.line(self.cursor.row) {
            Some(line) if self.cursor.col <= line.len() => line[..self.cursor.col]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0),
            _ => self.cursor.col - 1,
        };
        true
    }

    /// One step right; no-op at the end of the line.
    pub fn move_right(&mut self, doc: &Document) -> bool {
        let Some(line) = doc.line(self.cursor.row) else {
            return false;
        };
        if self.cursor.col >= line.len() {
            return false;
        }
        self.cursor.col = line[self.cursor.col..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor.col + i)
            .unwrap_or(line.len());
        true
    }

    /// One line up, then re-clamp and re-scroll.
    pub fn move_up(&mut self, doc: &Document) -> bool {
        if self.cursor.row == 0 {
            return false;
        }
        self.cursor.row -= 1;
        self.clamp_to_document(doc);
        self.scroll_for_cursor();
        true
    }

    /// One line down (never past the last line), then re-clamp and re-scroll.
    pub fn move_down(&mut self, doc: &Document) -> bool {
        if self.cursor.row + 1 >= doc.line_count() {
            return false;
        }
        self.cursor.row += 1;
        self.clamp_to_document(doc);
        self.scroll_for_cursor();
        true
    }

    /// Insert-mode left: at column 0 wrap to the end of the previous line.
    pub fn wrap_left(&mut self, doc: &Document) -> bool {
        if self.move_left(doc) {
            return true;
        }
        if self.cursor.row == 0 {
            return false;
        }
        self.cursor.row -= 1;
        self.cursor.col = doc.line_len(self.cursor.row);
        true
    }

    /// Insert-mode right: at the end of a line wrap to the start of the next one.
    pub fn wrap_right(&mut self, doc: &Document) -> bool {
        if self.move_right(doc) {
            return true;
        }
        if self.cursor.row + 1 >= doc.line_count() {
            return false;
        }
        self.cursor.row += 1;
        self.cursor.col = 0;
        true
    }
}
