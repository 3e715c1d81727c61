use tracing::{debug, info, warn};

use crate::mode::{Mode, PromptOrigin, SAVE_PROMPT};
use crate::session::EditorSession;
use crate::store::FileStore;

pub const UNSAVED_CHANGES: &str = "Unsaved changes! Use :q! or :wq to save and quit.";

/// A completed `:` command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `w`
    Write,
    /// `wq`
    WriteQuit,
    /// `q`
    Quit,
    /// `q!`
    ForceQuit,
    Unknown(String),
}

impl Command {
    /// Match the command line exactly; there are no arguments.
    pub fn parse(input: &str) -> Self {
        match input {
            "w" => Command::Write,
            "wq" => Command::WriteQuit,
            "q" => Command::Quit,
            "q!" => Command::ForceQuit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// What a save request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No filename yet; the filename prompt was opened instead.
    Prompted,
    Written,
    Failed,
}

impl SaveOutcome {
    /// Whether a write was actually tried (successfully or not).
    pub fn attempted(self) -> bool {
        !matches!(self, SaveOutcome::Prompted)
    }
}

impl<S: FileStore> EditorSession<S> {
    pub(crate) fn run_command(&mut self, input: &str) {
        let command = Command::parse(input);
        debug!(?command, "running command");
        match command {
            Command::Write => {
                self.save(PromptOrigin::Write);
            }
            Command::WriteQuit => {
                if self.save(PromptOrigin::WriteQuit).attempted() {
                    self.quit();
                }
            }
            Command::Quit => self.quit(),
            Command::ForceQuit => self.should_quit = true,
            Command::Unknown(text) => self.set_status(format!("Unknown command: {text}")),
        }
    }

    /// Write the document, or open the filename prompt when it has no name.
    pub(crate) fn save(&mut self, origin: PromptOrigin) -> SaveOutcome {
        match self.filename.clone() {
            Some(name) => self.write_as(name),
            None => {
                self.set_mode(Mode::prompt(origin));
                self.set_status(SAVE_PROMPT);
                SaveOutcome::Prompted
            }
        }
    }

    /// Name the document `name` and write it out.
    pub(crate) fn write_as(&mut self, name: String) -> SaveOutcome {
        let bytes = self.document.serialize();
        let outcome = match self.store.write(&name, &bytes) {
            Ok(()) => {
                info!(file = %name, bytes = bytes.len(), "saved");
                self.set_status(format!("File '{name}' saved successfully."));
                self.dirty = false;
                SaveOutcome::Written
            }
            Err(err) => {
                warn!(file = %name, "save failed: {err:#}");
                self.set_status(format!("Error saving file: {err:#}"));
                SaveOutcome::Failed
            }
        };
        self.filename = Some(name);
        outcome
    }

    /// Quit unless there are unsaved changes.
    pub(crate) fn quit(&mut self) {
        if self.dirty {
            self.set_status(UNSAVED_CHANGES);
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("w"), Command::Write);
        assert_eq!(Command::parse("wq"), Command::WriteQuit);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("q!"), Command::ForceQuit);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Command::parse(" w"), Command::Unknown(" w".into()));
        assert_eq!(Command::parse("write"), Command::Unknown("write".into()));
        assert_eq!(Command::parse("w out.txt"), Command::Unknown("w out.txt".into()));
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_save_outcome_attempted() {
        assert!(!SaveOutcome::Prompted.attempted());
        assert!(SaveOutcome::Written.attempted());
        assert!(SaveOutcome::Failed.attempted());
    }
}
