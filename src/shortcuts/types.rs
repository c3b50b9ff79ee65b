//! Core types for the shortcut system: Modifiers, Key, KeyEvent

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
///
/// Only alt/ctrl/shift exist here: that is the modifier set the host's
/// key-down events carry across the input boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(0b001);
    pub const CTRL: Modifiers = Modifiers(0b010);
    pub const SHIFT: Modifiers = Modifiers(0b100);

    /// Create modifiers from individual flags
    pub const fn new(alt: bool, ctrl: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if alt {
            bits |= 0b001;
        }
        if ctrl {
            bits |= 0b010;
        }
        if shift {
            bits |= 0b100;
        }
        Modifiers(bits)
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("ctrl");
        }
        if self.shift() {
            parts.push("shift");
        }
        if self.alt() {
            parts.push("alt");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A non-modifier key that can complete a chord
///
/// This is the closed key table shared with the host's input system: every
/// variant maps to exactly one physical key code (`KeyboardEvent.code`
/// naming). Left-hand alt/ctrl/shift are deliberately absent — those only
/// participate in chords as modifier flags. The right-hand variants are
/// ordinary keys with no modifier meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Tab,
    Enter,
    Escape,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Delete,
    ShiftRight,
    CtrlRight,
    AltRight,

    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,

    Semicolon,
    Equal,
    BracketLeft,
    BracketRight,
    Quote,
    Backslash,
    Comma,
    Period,
    Slash,
}

impl Key {
    /// The physical key code this key matches against
    ///
    /// This is the external boundary contract with the input system; the
    /// strings follow the `KeyboardEvent.code` convention.
    pub const fn code(self) -> &'static str {
        match self {
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Enter => "Enter",
            Key::Escape => "Escape",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::End => "End",
            Key::Home => "Home",
            Key::Left => "ArrowLeft",
            Key::Up => "ArrowUp",
            Key::Right => "ArrowRight",
            Key::Down => "ArrowDown",
            Key::Delete => "Delete",
            Key::ShiftRight => "ShiftRight",
            Key::CtrlRight => "ControlRight",
            Key::AltRight => "AltRight",

            Key::Digit0 => "Digit0",
            Key::Digit1 => "Digit1",
            Key::Digit2 => "Digit2",
            Key::Digit3 => "Digit3",
            Key::Digit4 => "Digit4",
            Key::Digit5 => "Digit5",
            Key::Digit6 => "Digit6",
            Key::Digit7 => "Digit7",
            Key::Digit8 => "Digit8",
            Key::Digit9 => "Digit9",

            Key::A => "KeyA",
            Key::B => "KeyB",
            Key::C => "KeyC",
            Key::D => "KeyD",
            Key::E => "KeyE",
            Key::F => "KeyF",
            Key::G => "KeyG",
            Key::H => "KeyH",
            Key::I => "KeyI",
            Key::J => "KeyJ",
            Key::K => "KeyK",
            Key::L => "KeyL",
            Key::M => "KeyM",
            Key::N => "KeyN",
            Key::O => "KeyO",
            Key::P => "KeyP",
            Key::Q => "KeyQ",
            Key::R => "KeyR",
            Key::S => "KeyS",
            Key::T => "KeyT",
            Key::U => "KeyU",
            Key::V => "KeyV",
            Key::W => "KeyW",
            Key::X => "KeyX",
            Key::Y => "KeyY",
            Key::Z => "KeyZ",

            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::F13 => "F13",

            Key::Semicolon => "Semicolon",
            Key::Equal => "Equal",
            Key::BracketLeft => "BracketLeft",
            Key::BracketRight => "BracketRight",
            Key::Quote => "Quote",
            Key::Backslash => "Backslash",
            Key::Comma => "Comma",
            Key::Period => "Period",
            Key::Slash => "Slash",
        }
    }

    /// The user-facing key name, as written in binding files
    pub const fn name(self) -> &'static str {
        match self {
            Key::Backspace => "backspace",
            Key::Tab => "tab",
            Key::Enter => "enter",
            Key::Escape => "esc",
            Key::PageUp => "pageup",
            Key::PageDown => "pagedown",
            Key::End => "end",
            Key::Home => "home",
            Key::Left => "left",
            Key::Up => "up",
            Key::Right => "right",
            Key::Down => "down",
            Key::Delete => "del",
            Key::ShiftRight => "shiftr",
            Key::CtrlRight => "ctrlr",
            Key::AltRight => "altr",

            Key::Digit0 => "0",
            Key::Digit1 => "1",
            Key::Digit2 => "2",
            Key::Digit3 => "3",
            Key::Digit4 => "4",
            Key::Digit5 => "5",
            Key::Digit6 => "6",
            Key::Digit7 => "7",
            Key::Digit8 => "8",
            Key::Digit9 => "9",

            Key::A => "a",
            Key::B => "b",
            Key::C => "c",
            Key::D => "d",
            Key::E => "e",
            Key::F => "f",
            Key::G => "g",
            Key::H => "h",
            Key::I => "i",
            Key::J => "j",
            Key::K => "k",
            Key::L => "l",
            Key::M => "m",
            Key::N => "n",
            Key::O => "o",
            Key::P => "p",
            Key::Q => "q",
            Key::R => "r",
            Key::S => "s",
            Key::T => "t",
            Key::U => "u",
            Key::V => "v",
            Key::W => "w",
            Key::X => "x",
            Key::Y => "y",
            Key::Z => "z",

            Key::F1 => "f1",
            Key::F2 => "f2",
            Key::F3 => "f3",
            Key::F4 => "f4",
            Key::F5 => "f5",
            Key::F6 => "f6",
            Key::F7 => "f7",
            Key::F8 => "f8",
            Key::F9 => "f9",
            Key::F10 => "f10",
            Key::F11 => "f11",
            Key::F12 => "f12",
            Key::F13 => "f13",

            Key::Semicolon => ";",
            Key::Equal => "=",
            Key::BracketLeft => "[",
            Key::BracketRight => "]",
            Key::Quote => "'",
            Key::Backslash => "\\",
            Key::Comma => ",",
            Key::Period => ".",
            Key::Slash => "/",
        }
    }

    /// Parse a key from its user-facing name
    ///
    /// Returns None for names outside the table (including the left-hand
    /// modifier names "alt"/"ctrl"/"shift", which are modifiers, not keys).
    pub fn from_name(name: &str) -> Option<Key> {
        let name = name.to_lowercase();

        // Single characters: letters, digits, punctuation
        if name.chars().count() == 1 {
            let c = name.chars().next()?;
            return Key::from_char(c);
        }

        // Function keys f1..f13
        if let Some(n) = name.strip_prefix('f') {
            if let Ok(n) = n.parse::<u8>() {
                return Key::function(n);
            }
        }

        match name.as_str() {
            "backspace" => Some(Key::Backspace),
            "tab" => Some(Key::Tab),
            "enter" => Some(Key::Enter),
            "esc" | "escape" => Some(Key::Escape),
            "pageup" => Some(Key::PageUp),
            "pagedown" => Some(Key::PageDown),
            "end" => Some(Key::End),
            "home" => Some(Key::Home),
            "left" => Some(Key::Left),
            "up" => Some(Key::Up),
            "right" => Some(Key::Right),
            "down" => Some(Key::Down),
            "del" | "delete" => Some(Key::Delete),
            "shiftr" => Some(Key::ShiftRight),
            "ctrlr" => Some(Key::CtrlRight),
            "altr" => Some(Key::AltRight),
            _ => None,
        }
    }

    fn from_char(c: char) -> Option<Key> {
        match c {
            'a' => Some(Key::A),
            'b' => Some(Key::B),
            'c' => Some(Key::C),
            'd' => Some(Key::D),
            'e' => Some(Key::E),
            'f' => Some(Key::F),
            'g' => Some(Key::G),
            'h' => Some(Key::H),
            'i' => Some(Key::I),
            'j' => Some(Key::J),
            'k' => Some(Key::K),
            'l' => Some(Key::L),
            'm' => Some(Key::M),
            'n' => Some(Key::N),
            'o' => Some(Key::O),
            'p' => Some(Key::P),
            'q' => Some(Key::Q),
            'r' => Some(Key::R),
            's' => Some(Key::S),
            't' => Some(Key::T),
            'u' => Some(Key::U),
            'v' => Some(Key::V),
            'w' => Some(Key::W),
            'x' => Some(Key::X),
            'y' => Some(Key::Y),
            'z' => Some(Key::Z),
            '0' => Some(Key::Digit0),
            '1' => Some(Key::Digit1),
            '2' => Some(Key::Digit2),
            '3' => Some(Key::Digit3),
            '4' => Some(Key::Digit4),
            '5' => Some(Key::Digit5),
            '6' => Some(Key::Digit6),
            '7' => Some(Key::Digit7),
            '8' => Some(Key::Digit8),
            '9' => Some(Key::Digit9),
            ';' => Some(Key::Semicolon),
            '=' => Some(Key::Equal),
            '[' => Some(Key::BracketLeft),
            ']' => Some(Key::BracketRight),
            '\'' => Some(Key::Quote),
            '\\' => Some(Key::Backslash),
            ',' => Some(Key::Comma),
            '.' => Some(Key::Period),
            '/' => Some(Key::Slash),
            _ => None,
        }
    }

    fn function(n: u8) -> Option<Key> {
        match n {
            1 => Some(Key::F1),
            2 => Some(Key::F2),
            3 => Some(Key::F3),
            4 => Some(Key::F4),
            5 => Some(Key::F5),
            6 => Some(Key::F6),
            7 => Some(Key::F7),
            8 => Some(Key::F8),
            9 => Some(Key::F9),
            10 => Some(Key::F10),
            11 => Some(Key::F11),
            12 => Some(Key::F12),
            13 => Some(Key::F13),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A key-down event from the host's input system
///
/// This is the only external protocol the shortcut engine speaks: a
/// physical key code plus the three modifier flags held at the time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key code (`KeyboardEvent.code` naming, e.g. "KeyS")
    pub code: String,
    /// Modifier flags held when the key went down
    pub mods: Modifiers,
}

impl KeyEvent {
    /// Create an event from a raw physical code and modifier flags
    pub fn new(code: impl Into<String>, alt: bool, ctrl: bool, shift: bool) -> Self {
        Self {
            code: code.into(),
            mods: Modifiers::new(alt, ctrl, shift),
        }
    }

    /// Create an event for a known key (mainly for hosts and tests)
    pub fn for_key(key: Key, mods: Modifiers) -> Self {
        Self {
            code: key.code().to_string(),
            mods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.alt());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
    }

    #[test]
    fn test_modifiers_new() {
        let mods = Modifiers::new(true, false, true);
        assert!(mods.alt());
        assert!(!mods.ctrl());
        assert!(mods.shift());
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::A.code(), "KeyA");
        assert_eq!(Key::Digit0.code(), "Digit0");
        assert_eq!(Key::Semicolon.code(), "Semicolon");
        assert_eq!(Key::CtrlRight.code(), "ControlRight");
        assert_eq!(Key::F13.code(), "F13");
        assert_eq!(Key::Left.code(), "ArrowLeft");
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("a"), Some(Key::A));
        assert_eq!(Key::from_name("S"), Some(Key::S));
        assert_eq!(Key::from_name("7"), Some(Key::Digit7));
        assert_eq!(Key::from_name("f12"), Some(Key::F12));
        assert_eq!(Key::from_name("esc"), Some(Key::Escape));
        assert_eq!(Key::from_name(";"), Some(Key::Semicolon));
        assert_eq!(Key::from_name("shiftr"), Some(Key::ShiftRight));
    }

    #[test]
    fn test_left_modifiers_are_not_keys() {
        assert_eq!(Key::from_name("ctrl"), None);
        assert_eq!(Key::from_name("shift"), None);
        assert_eq!(Key::from_name("alt"), None);
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(Key::from_name("f14"), None);
        assert_eq!(Key::from_name("meta"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for key in [Key::A, Key::Digit3, Key::F10, Key::Delete, Key::Backslash] {
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn test_key_event_for_key() {
        let event = KeyEvent::for_key(Key::S, Modifiers::CTRL);
        assert_eq!(event.code, "KeyS");
        assert!(event.mods.ctrl());
        assert!(!event.mods.shift());
    }
}
