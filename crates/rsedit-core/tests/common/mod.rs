//! Shared helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use rsedit_core::{EditorSession, Key, MemoryStore};

pub type TestSession = EditorSession<MemoryStore>;

/// An unnamed 80x24 session holding `text`, cursor at the origin.
pub fn session(text: &str) -> TestSession {
    let mut s = EditorSession::new(MemoryStore::new(), 80, 24);
    s.load_bytes(text.as_bytes());
    s
}

/// Like [`session`], but already named `name`.
pub fn named_session(text: &str, name: &str) -> TestSession {
    let mut s = session(text);
    s.set_filename(name);
    s
}

/// Feed every character of `keys` as a `Key::Char`.
pub fn type_str(s: &mut TestSession, keys: &str) {
    for ch in keys.chars() {
        s.handle_key(Key::Char(ch));
    }
}

/// Enter Command mode, type `cmd`, press Enter.
pub fn run(s: &mut TestSession, cmd: &str) {
    s.handle_key(Key::Char(':'));
    type_str(s, cmd);
    s.handle_key(Key::Enter);
}

pub fn lines(s: &TestSession) -> Vec<String> {
    s.document().lines().to_vec()
}

pub fn status(s: &TestSession) -> Option<String> {
    s.status_message().map(|m| m.text.clone())
}
