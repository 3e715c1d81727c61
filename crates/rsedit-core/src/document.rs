/// A (row, col) position into a [`Document`].
///
/// `col` is a byte offset into the line, not a display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result of a backspace-style deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Where the cursor belongs after the deletion.
    pub cursor: Position,
    /// Whether any text was actually removed or joined.
    pub changed: bool,
}

/// The edited text, held as an ordered list of lines.
///
/// Lines never contain a line terminator. There is always at least one line;
/// an empty document is a single empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a document from raw file bytes. See [`Document::load`].
    pub fn from_bytes(raw: &[u8]) -> Self {
        let mut doc = Self::new();
        doc.load(raw);
        doc
    }

    /// Build a document from already-split lines. An empty slice yields one empty line.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut lines: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Number of lines in the document (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length in bytes of `row`, or 0 when the row is below the content.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, String::len)
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Insert `ch` at `col` on `row`, padding with empty lines when `row` is
    /// past the end. `col` is clamped to the line. Returns the column just
    /// after the inserted character.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> usize {
        self.ensure_line(row);
        let line = &mut self.lines[row];
        let at = snap_to_char_boundary(line, col);
        line.insert(at, ch);
        at + ch.len_utf8()
    }

    /// Split `row` at `col`: `[0, col)` stays on `row`, `[col, end)` becomes a
    /// new line at `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) {
        self.ensure_line(row);
        let line = &mut self.lines[row];
        let at = snap_to_char_boundary(line, col);
        let rest = line.split_off(at);
        self.lines.insert(row + 1, rest);
    }

    /// Backspace at (`row`, `col`).
    ///
    /// At the start of a line the line is joined onto the previous one. A
    /// column past the end of the line only steps the cursor back.
    pub fn delete_at(&mut self, row: usize, col: usize) -> DeleteOutcome {
        let unchanged = |cursor| DeleteOutcome {
            cursor,
            changed: false,
        };

        if row == 0 && col == 0 {
            return unchanged(Position::new(0, 0));
        }

        if row >= self.lines.len() {
            // Nothing stored below the content: nothing to delete.
            let last = self.lines.len() - 1;
            return unchanged(Position::new(last, self.lines[last].len()));
        }

        if col == 0 {
            let current = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let join_col = prev.len();
            prev.push_str(&current);
            return DeleteOutcome {
                cursor: Position::new(row - 1, join_col),
                changed: true,
            };
        }

        let line = &mut self.lines[row];
        if col > line.len() {
            return unchanged(Position::new(row, col - 1));
        }

        let start = line[..col]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        line.replace_range(start..col, "");
        DeleteOutcome {
            cursor: Position::new(row, start),
            changed: true,
        }
    }

    // ── Load / save ──────────────────────────────────────────────────

    /// Replace the whole document with the contents of `raw`.
    ///
    /// CRLF is normalised to LF and the text split on LF. A trailing LF does
    /// not produce a trailing empty line, except for input that is empty or a
    /// lone LF, which loads as a single empty line. Invalid UTF-8 is replaced
    /// with U+FFFD.
    pub fn load(&mut self, raw: &[u8]) {
        let text = String::from_utf8_lossy(raw).replace("\r\n", "\n");
        let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
        if lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        self.lines = lines;
    }

    /// Serialize for saving: lines joined with LF, terminated by one LF
    /// unless that leaves nothing at all. A lone empty line saves as no bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out.into_bytes()
    }

    fn ensure_line(&mut self, row: usize) {
        while self.lines.len() <= row {
            self.lines.push(String::new());
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Snap a byte offset to the char boundary at or before it, clamped to the line.
pub(crate) fn snap_to_char_boundary(s: &str, target: usize) -> usize {
    if target >= s.len() {
        return s.len();
    }
    s.char_indices()
        .take_while(|(i, _)| *i <= target)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}
