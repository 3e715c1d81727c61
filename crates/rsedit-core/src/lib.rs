//! Editing core for rsedit: a modal, single-buffer text editor with no
//! terminal dependencies. A front end feeds [`Key`]s into an
//! [`EditorSession`] and draws its [`RenderState`].

pub mod command;
pub mod document;
pub mod key;
pub mod mode;
pub mod render;
pub mod session;
pub mod status;
pub mod store;
pub mod viewport;

pub use command::{Command, SaveOutcome};
pub use document::{DeleteOutcome, Document, Position};
pub use key::Key;
pub use mode::{Mode, ModeKind, PromptOrigin};
pub use render::{RenderState, RowView, ScreenPos};
pub use session::EditorSession;
pub use status::StatusMessage;
pub use store::{FileStore, FsStore, MemoryStore};
pub use viewport::{CursorViewport, Viewport};
