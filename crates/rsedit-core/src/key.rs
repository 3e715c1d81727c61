/// One logical key, as decoded by the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    /// Nothing was read (e.g. the poll timed out).
    None,
}

impl Key {
    /// Printable characters are ASCII space through `~`.
    pub fn printable(&self) -> Option<char> {
        match *self {
            Key::Char(c) if c == ' ' || c.is_ascii_graphic() => Some(c),
            _ => None,
        }
    }
}
