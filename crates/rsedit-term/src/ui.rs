use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rsedit_core::{ModeKind, RenderState, RowView};

/// Text area on top, one status row at the bottom.
/// Returns (text_area, status_area).
pub fn editor_layout(area: Rect) -> (Rect, Rect) {
    let [text_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (text_area, status_area)
}

/// Draw one frame of editor state.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let (text_area, status_area) = editor_layout(frame.area());

    let lines: Vec<Line> = state
        .rows
        .iter()
        .map(|row| match row {
            RowView::Text(text) => Line::raw(text.as_str()),
            RowView::BelowContent => {
                Line::styled("~", Style::default().add_modifier(Modifier::DIM))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), text_area);

    let status = Paragraph::new(state.status.as_str())
        .style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(status, status_area);

    frame.set_cursor_position(cursor_position(state, text_area, status_area));
}

/// Command line and filename prompt put the cursor after the status text;
/// otherwise it sits at the edit position.
fn cursor_position(state: &RenderState, text_area: Rect, status_area: Rect) -> Position {
    match state.mode {
        ModeKind::Command | ModeKind::FilenamePrompt => {
            let col = clamp_u16(state.status.len()).min(status_area.width.saturating_sub(1));
            Position::new(status_area.x + col, status_area.y)
        }
        ModeKind::Normal | ModeKind::Insert => {
            let col = clamp_u16(state.cursor.col).min(text_area.width.saturating_sub(1));
            let row = clamp_u16(state.cursor.row).min(text_area.height.saturating_sub(1));
            Position::new(text_area.x + col, text_area.y + row)
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
