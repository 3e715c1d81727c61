//! Terminal input and size, translated into the editor's terms

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rsedit_core::Key;

/// Decode one crossterm event into a [`Key`].
///
/// Anything the editor has no use for (mouse, resize, focus, chorded keys,
/// key releases) becomes [`Key::None`].
pub fn key_from_event(event: &Event) -> Key {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => decode_key(key),
        _ => Key::None,
    }
}

fn decode_key(key: &KeyEvent) -> Key {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Key::None;
    }
    match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => Key::None,
    }
}

/// The queried terminal size, or `fallback` when it is unavailable or empty.
pub fn size_or(queried: io::Result<(u16, u16)>, fallback: (usize, usize)) -> (usize, usize) {
    match queried {
        Ok((w, h)) if w > 0 && h > 0 => (usize::from(w), usize::from(h)),
        Ok(_) => fallback,
        Err(err) => {
            tracing::debug!("terminal size unavailable: {err}");
            fallback
        }
    }
}

pub fn screen_size(fallback: (usize, usize)) -> (usize, usize) {
    size_or(crossterm::terminal::size(), fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(key_from_event(&press(KeyCode::Char('a'), KeyModifiers::NONE)), Key::Char('a'));
        assert_eq!(key_from_event(&press(KeyCode::Esc, KeyModifiers::NONE)), Key::Escape);
        assert_eq!(key_from_event(&press(KeyCode::Enter, KeyModifiers::NONE)), Key::Enter);
        assert_eq!(
            key_from_event(&press(KeyCode::Backspace, KeyModifiers::NONE)),
            Key::Backspace
        );
        assert_eq!(key_from_event(&press(KeyCode::Left, KeyModifiers::NONE)), Key::Left);
        assert_eq!(key_from_event(&press(KeyCode::Right, KeyModifiers::NONE)), Key::Right);
        assert_eq!(key_from_event(&press(KeyCode::Up, KeyModifiers::NONE)), Key::Up);
        assert_eq!(key_from_event(&press(KeyCode::Down, KeyModifiers::NONE)), Key::Down);
    }

    #[test]
    fn test_shifted_char_is_kept() {
        assert_eq!(key_from_event(&press(KeyCode::Char('Q'), KeyModifiers::SHIFT)), Key::Char('Q'));
    }

    #[test]
    fn test_chorded_keys_are_ignored() {
        assert_eq!(key_from_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Key::None);
        assert_eq!(key_from_event(&press(KeyCode::Char('x'), KeyModifiers::ALT)), Key::None);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(key_from_event(&press(KeyCode::Tab, KeyModifiers::NONE)), Key::None);
        assert_eq!(key_from_event(&press(KeyCode::F(1), KeyModifiers::NONE)), Key::None);
        assert_eq!(key_from_event(&press(KeyCode::Delete, KeyModifiers::NONE)), Key::None);
    }

    #[test]
    fn test_release_and_other_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(key_from_event(&release), Key::None);
        assert_eq!(key_from_event(&Event::Resize(80, 24)), Key::None);
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(key_from_event(&mouse), Key::None);
    }

    #[test]
    fn test_size_fallback() {
        assert_eq!(size_or(Ok((120, 40)), (80, 24)), (120, 40));
        assert_eq!(size_or(Ok((0, 0)), (80, 24)), (80, 24));
        assert_eq!(size_or(Err(io::Error::other("no tty")), (80, 24)), (80, 24));
    }
}
