//! Chord type: one concrete key combination that can trigger a shortcut

use std::fmt;

use super::types::{Key, KeyEvent, Modifiers};

/// One element of a chord as written at registration time
///
/// A chord is declared as a list of these, e.g. `[Ctrl, Shift, Key(Key::S)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChordKey {
    Alt,
    Ctrl,
    Shift,
    Key(Key),
}

/// A concrete key combination: a modifier set plus at most one key
///
/// A chord with no key is representable but never matches any event — it
/// degenerates to an empty combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chord {
    pub mods: Modifiers,
    pub key: Option<Key>,
}

impl Chord {
    /// Create a chord from a modifier set and key
    pub const fn new(mods: Modifiers, key: Key) -> Self {
        Self {
            mods,
            key: Some(key),
        }
    }

    /// Create a chord from a declared key list
    ///
    /// Modifier entries accumulate into the modifier set; the first `Key`
    /// entry becomes the chord's key and later ones are ignored.
    pub fn from_keys(keys: &[ChordKey]) -> Self {
        let mut mods = Modifiers::NONE;
        let mut key = None;
        for k in keys {
            match k {
                ChordKey::Alt => mods = mods | Modifiers::ALT,
                ChordKey::Ctrl => mods = mods | Modifiers::CTRL,
                ChordKey::Shift => mods = mods | Modifiers::SHIFT,
                ChordKey::Key(k) => {
                    if key.is_none() {
                        key = Some(*k);
                    }
                }
            }
        }
        Self { mods, key }
    }

    /// Check whether a key event triggers this chord
    ///
    /// Exact-modifier-set match: the event's flags must equal the chord's
    /// modifier set, not merely contain it. ctrl+shift+s does not match a
    /// ctrl+s chord.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let Some(key) = self.key else {
            return false;
        };
        event.code == key.code() && event.mods == self.mods
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mods.is_empty(), self.key) {
            (true, Some(key)) => write!(f, "{}", key),
            (false, Some(key)) => write!(f, "{}+{}", self.mods, key),
            (_, None) => write!(f, "{}", self.mods),
        }
    }
}
