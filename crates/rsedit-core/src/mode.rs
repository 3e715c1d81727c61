use tracing::debug;

use crate::key::Key;
use crate::session::EditorSession;
use crate::store::FileStore;

/// Text shown while asking for a filename.
pub const SAVE_PROMPT: &str = "Save file as: ";
pub const SAVE_ABORTED: &str = "Save aborted.";

/// Which command opened the filename prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOrigin {
    /// `:w` - just save.
    Write,
    /// `:wq` - save, then try to quit.
    WriteQuit,
}

/// The active interaction mode.
///
/// The command-line text only exists while a mode that edits it is active,
/// so leaving the mode always discards it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Command {
        buffer: String,
    },
    FilenamePrompt {
        origin: PromptOrigin,
        buffer: String,
    },
}

/// Field-less view of [`Mode`] for rendering and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Normal,
    Insert,
    Command,
    FilenamePrompt,
}

impl ModeKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
            Self::FilenamePrompt => "PROMPT",
        }
    }
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Normal => ModeKind::Normal,
            Mode::Insert => ModeKind::Insert,
            Mode::Command { .. } => ModeKind::Command,
            Mode::FilenamePrompt { .. } => ModeKind::FilenamePrompt,
        }
    }

    /// Fresh command line, as entered with `:`.
    pub fn command() -> Self {
        Mode::Command {
            buffer: String::new(),
        }
    }

    /// Fresh filename prompt for `origin`.
    pub fn prompt(origin: PromptOrigin) -> Self {
        Mode::FilenamePrompt {
            origin,
            buffer: String::new(),
        }
    }

    /// Text typed so far in Command or FilenamePrompt mode.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Mode::Command { buffer } | Mode::FilenamePrompt { buffer, .. } => Some(buffer),
            Mode::Normal | Mode::Insert => None,
        }
    }

    pub fn prompt_origin(&self) -> Option<PromptOrigin> {
        match self {
            Mode::FilenamePrompt { origin, .. } => Some(*origin),
            _ => None,
        }
    }
}

// ── Key routing ──────────────────────────────────────────────────────

impl<S: FileStore> EditorSession<S> {
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode.kind() != mode.kind() {
            debug!(from = ?self.mode.kind(), to = ?mode.kind(), "mode change");
        }
        self.mode = mode;
    }

    pub(crate) fn dispatch_key(&mut self, key: Key) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Insert => self.handle_insert_key(key),
            Mode::Command { .. } => self.handle_command_key(key),
            Mode::FilenamePrompt { .. } => self.handle_prompt_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: Key) {
        match key {
            Key::Char('i') => self.set_mode(Mode::Insert),
            Key::Char(':') => {
                self.set_mode(Mode::command());
                self.clear_status();
            }
            Key::Char('h') | Key::Left => {
                self.view.move_left(&self.document);
            }
            Key::Char('l') | Key::Right => {
                self.view.move_right(&self.document);
            }
            Key::Char('j') | Key::Down => {
                self.view.move_down(&self.document);
            }
            Key::Char('k') | Key::Up => {
                self.view.move_up(&self.document);
            }
            // A bare `q` does nothing; quitting goes through `:q`.
            Key::Char('q') => {}
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.set_mode(Mode::Normal);
                if let Some(status) = self.status.as_mut() {
                    status.expire();
                }
            }
            Key::Enter => {
                let at = self.view.cursor;
                self.document.split_line(at.row, at.col);
                self.view.cursor.row += 1;
                self.view.cursor.col = 0;
                self.dirty = true;
            }
            Key::Backspace => {
                let at = self.view.cursor;
                let outcome = self.document.delete_at(at.row, at.col);
                self.view.cursor = outcome.cursor;
                if outcome.changed {
                    self.dirty = true;
                }
            }
            Key::Left => {
                self.view.wrap_left(&self.document);
            }
            Key::Right => {
                self.view.wrap_right(&self.document);
            }
            Key::Up => {
                self.view.move_up(&self.document);
            }
            Key::Down => {
                self.view.move_down(&self.document);
            }
            _ => {
                if let Some(ch) = key.printable() {
                    let at = self.view.cursor;
                    self.view.cursor.col = self.document.insert_char(at.row, at.col, ch);
                    self.dirty = true;
                }
            }
        }
    }

    fn handle_command_key(&mut self, key: Key) {
        let Mode::Command { buffer } = &mut self.mode else {
            return;
        };
        match key {
            Key::Escape => self.set_mode(Mode::Normal),
            Key::Enter => {
                let line = std::mem::take(buffer);
                // Enter always leaves Command mode; the command itself may
                // switch to the filename prompt instead.
                self.set_mode(Mode::Normal);
                self.run_command(&line);
            }
            Key::Backspace => {
                buffer.pop();
            }
            _ => {
                if let Some(ch) = key.printable() {
                    buffer.push(ch);
                }
            }
        }
    }

    fn handle_prompt_key(&mut self, key: Key) {
        let Mode::FilenamePrompt { origin, buffer } = &mut self.mode else {
            return;
        };
        match key {
            Key::Escape => {
                self.set_status(SAVE_ABORTED);
                self.set_mode(Mode::Normal);
            }
            Key::Enter => {
                let origin = *origin;
                let name = std::mem::take(buffer);
                self.set_mode(Mode::Normal);
                if name.is_empty() {
                    self.set_status(SAVE_ABORTED);
                    return;
                }
                self.clear_status();
                self.write_as(name);
                if origin == PromptOrigin::WriteQuit {
                    self.quit();
                }
            }
            Key::Backspace => {
                buffer.pop();
                let text = format!("{SAVE_PROMPT}{buffer}");
                self.set_status(text);
            }
            _ => {
                if let Some(ch) = key.printable() {
                    buffer.push(ch);
                    let text = format!("{SAVE_PROMPT}{buffer}");
                    self.set_status(text);
                }
            }
        }
    }
}
