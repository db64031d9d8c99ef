#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! The core never polls the keyboard itself; an input source delivers
//! already-resolved semantic action names together with the raw
//! [`KeyEvent`] that produced them. These types are the raw half of that
//! contract. All derive `Clone`, `PartialEq`, `Eq` for use in tests and
//! pattern matching.

use bitflags::bitflags;
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// The display was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// A frame tick.
    Tick,
}

impl Event {
    /// Map a crossterm event into a core [`Event`].
    ///
    /// Key releases and repeat events are dropped; so are event kinds the
    /// core has no use for (mouse, paste, focus).
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) if key.kind == cte::KeyEventKind::Press => {
                Some(Self::Key(KeyEvent {
                    code: KeyCode::from_crossterm(key.code)?,
                    modifiers: Modifiers::from_crossterm(key.modifiers),
                }))
            }
            cte::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// A function key (F1 = `F(1)`).
    F(u8),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Insert,
}

impl KeyCode {
    fn from_crossterm(code: cte::KeyCode) -> Option<Self> {
        Some(match code {
            cte::KeyCode::Char(c) => Self::Char(c),
            cte::KeyCode::F(n) => Self::F(n),
            cte::KeyCode::Enter => Self::Enter,
            cte::KeyCode::Esc => Self::Escape,
            cte::KeyCode::Backspace => Self::Backspace,
            cte::KeyCode::Tab => Self::Tab,
            cte::KeyCode::Up => Self::Up,
            cte::KeyCode::Down => Self::Down,
            cte::KeyCode::Left => Self::Left,
            cte::KeyCode::Right => Self::Right,
            cte::KeyCode::Home => Self::Home,
            cte::KeyCode::End => Self::End,
            cte::KeyCode::PageUp => Self::PageUp,
            cte::KeyCode::PageDown => Self::PageDown,
            cte::KeyCode::Delete => Self::Delete,
            cte::KeyCode::Insert => Self::Insert,
            _ => return None,
        })
    }
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl Modifiers {
    fn from_crossterm(mods: cte::KeyModifiers) -> Self {
        let mut out = Self::NONE;
        if mods.contains(cte::KeyModifiers::SHIFT) {
            out |= Self::SHIFT;
        }
        if mods.contains(cte::KeyModifiers::CONTROL) {
            out |= Self::CTRL;
        }
        if mods.contains(cte::KeyModifiers::ALT) {
            out |= Self::ALT;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_char() {
        let ev = KeyEvent::new(KeyCode::Char('q'));
        assert!(ev.is_char('q'));
        assert!(!ev.is_char('x'));
        assert!(!KeyEvent::new(KeyCode::Enter).is_char('q'));
    }

    #[test]
    fn maps_crossterm_key_press() {
        let ct = cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Char('a'),
            cte::KeyModifiers::CONTROL,
        ));
        let ev = Event::from_crossterm(ct).unwrap();
        match ev {
            Event::Key(key) => {
                assert!(key.is_char('a'));
                assert!(key.modifiers.contains(Modifiers::CTRL));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn maps_crossterm_resize() {
        let ev = Event::from_crossterm(cte::Event::Resize(100, 30)).unwrap();
        assert_eq!(
            ev,
            Event::Resize {
                width: 100,
                height: 30
            }
        );
    }

    #[test]
    fn drops_key_release() {
        let mut key = cte::KeyEvent::new(cte::KeyCode::Char('a'), cte::KeyModifiers::NONE);
        key.kind = cte::KeyEventKind::Release;
        assert_eq!(Event::from_crossterm(cte::Event::Key(key)), None);
    }
}
