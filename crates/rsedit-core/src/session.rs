use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{info, trace};

use crate::document::{Document, Position};
use crate::key::Key;
use crate::mode::{Mode, ModeKind};
use crate::render::{RenderState, RowView, ScreenPos, default_status_line, truncate_to_width};
use crate::status::{DEFAULT_STATUS_TIMEOUT, StatusMessage};
use crate::store::FileStore;
use crate::viewport::{CursorViewport, Viewport};

/// One open document and everything needed to edit it.
///
/// The host loop owns a single session, feeds it keys through
/// [`handle_key`](Self::handle_key) and draws whatever
/// [`render_state`](Self::render_state) returns, until
/// [`should_quit`](Self::should_quit) turns true.
pub struct EditorSession<S: FileStore> {
    pub(crate) document: Document,
    pub(crate) view: CursorViewport,
    pub(crate) mode: Mode,
    pub(crate) filename: Option<String>,
    pub(crate) dirty: bool,
    pub(crate) status: Option<StatusMessage>,
    pub(crate) should_quit: bool,
    pub(crate) store: S,
    pub(crate) status_timeout: TimeDelta,
}

impl<S: FileStore> EditorSession<S> {
    /// An empty, unnamed, clean session in Normal mode.
    pub fn new(store: S, width: usize, height: usize) -> Self {
        Self {
            document: Document::new(),
            view: CursorViewport::new(width, height),
            mode: Mode::Normal,
            filename: None,
            dirty: false,
            status: None,
            should_quit: false,
            store,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }

    /// A session editing `path`.
    ///
    /// A file that does not exist yet is not an error: the session starts
    /// empty with the name already set, so the first `:w` creates it.
    pub fn open(store: S, path: &str, width: usize, height: usize) -> Result<Self> {
        let bytes = store
            .load(path)
            .with_context(|| format!("Failed to open {path}"))?;
        let mut session = Self::new(store, width, height);
        session.filename = Some(path.to_string());
        match bytes {
            Some(bytes) => {
                session.load_bytes(&bytes);
                info!(
                    file = path,
                    lines = session.document.line_count(),
                    "loaded"
                );
            }
            None => info!(file = path, "new file"),
        }
        Ok(session)
    }

    pub fn with_status_timeout(mut self, timeout: TimeDelta) -> Self {
        self.status_timeout = timeout;
        self
    }

    /// Replace the whole document. Cursor and scroll go back to the origin
    /// and the session counts as clean.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        self.document.load(bytes);
        self.view.reset();
        self.dirty = false;
    }

    pub fn set_filename(&mut self, name: impl Into<String>) {
        self.filename = Some(name.into());
    }

    /// Adopt new terminal dimensions. Zero is treated as one.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.view.resize(width, height);
        self.view.clamp_to_document(&self.document);
        self.view.scroll_for_cursor();
    }

    /// Apply one key in the current mode.
    pub fn handle_key(&mut self, key: Key) {
        if key == Key::None {
            return;
        }
        trace!(?key, mode = ?self.mode.kind(), "key");
        self.dispatch_key(key);
        if matches!(self.mode, Mode::Normal | Mode::Insert) {
            // Edits keep the column inside the line only; vertical moves and
            // resizes also cap it to the screen width.
            self.view.clamp_to_line(&self.document);
            self.view.scroll_for_cursor();
        }
    }

    pub fn render_state(&self) -> RenderState {
        self.render_state_at(Utc::now())
    }

    /// Snapshot of the screen, judging status-message age against `now`.
    pub fn render_state_at(&self, now: DateTime<Utc>) -> RenderState {
        let vp = self.view.viewport;
        let rows = (vp.row_offset..vp.row_offset + vp.text_rows())
            .map(|row| match self.document.line(row) {
                Some(line) => RowView::Text(truncate_to_width(line, vp.width).to_string()),
                None => RowView::BelowContent,
            })
            .collect();

        let cursor = self.view.cursor;
        let screen = ScreenPos {
            row: cursor
                .row
                .saturating_sub(vp.row_offset)
                .min(vp.text_rows() - 1),
            col: cursor.col.saturating_sub(vp.col_offset).min(vp.width - 1),
        };

        RenderState {
            rows,
            mode: self.mode.kind(),
            status: self.status_line(now),
            cursor: screen,
        }
    }

    fn status_line(&self, now: DateTime<Utc>) -> String {
        match &self.mode {
            Mode::Command { buffer } => return format!(":{buffer}"),
            Mode::FilenamePrompt { .. } => {
                if let Some(status) = &self.status {
                    return status.text.clone();
                }
            }
            Mode::Normal | Mode::Insert => {}
        }
        if let Some(status) = &self.status
            && status.is_live(now, self.status_timeout)
        {
            return status.text.clone();
        }
        default_status_line(
            self.mode.kind(),
            self.filename.as_deref(),
            self.dirty,
            self.view.cursor.row,
            self.document.line_count(),
            self.view.viewport.width,
        )
    }

    // ── Status ───────────────────────────────────────────────────────

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text));
    }

    pub(crate) fn clear_status(&mut self) {
        self.status = None;
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Position {
        self.view.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.view.viewport
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
