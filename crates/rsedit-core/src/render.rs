use crate::document::snap_to_char_boundary;
use crate::mode::ModeKind;

/// Placeholder for an unnamed document in the status line.
pub const NO_NAME: &str = "[No Name]";

/// Longest filename (with dirty marker) shown in the default status line.
const MAX_NAME_LEN: usize = 20;

/// One text row of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    /// A document line, already cut to the viewport width.
    Text(String),
    /// A row past the last line of the document.
    BelowContent,
}

/// Cursor coordinates on screen, relative to the top-left of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPos {
    pub row: usize,
    pub col: usize,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub rows: Vec<RowView>,
    pub mode: ModeKind,
    pub status: String,
    pub cursor: ScreenPos,
}

/// Cut `line` to at most `width` bytes without splitting a character.
pub fn truncate_to_width(line: &str, width: usize) -> &str {
    &line[..snap_to_char_boundary(line, width)]
}

/// The status line shown when no message is live:
/// `" NORMAL | name + "` on the left, `" row/count "` on the right.
pub fn default_status_line(
    mode: ModeKind,
    filename: Option<&str>,
    dirty: bool,
    cursor_row: usize,
    line_count: usize,
    width: usize,
) -> String {
    let mut name = filename.unwrap_or(NO_NAME).to_string();
    if dirty {
        name.push_str(" +");
    }
    if name.len() > MAX_NAME_LEN {
        let keep = snap_to_char_boundary(&name, MAX_NAME_LEN - 3);
        name.truncate(keep);
        name.push_str("...");
    }

    let left = format!(" {} | {} ", mode.label(), name);
    let right = format!(" {}/{} ", cursor_row + 1, line_count);

    let used = left.len() + right.len();
    let pad = width.saturating_sub(used);
    format!("{left}{}{right}", " ".repeat(pad))
}
