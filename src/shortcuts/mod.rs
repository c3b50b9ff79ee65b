//! Scoped, chord-based keyboard shortcut engine
//!
//! This module decodes raw key-down events into registered actions:
//! - Chords are declared over a closed key table ([`Key`]) and an
//!   alt/ctrl/shift modifier set ([`Modifiers`])
//! - Matching is exact on the modifier set: extra held modifiers never
//!   trigger a smaller chord
//! - Shortcuts may be scoped to a screen id or registered globally
//! - Binding files can declare chords as strings ("ctrl+shift+a"),
//!   validated at parse time
//!
//! # Architecture
//!
//! ```text
//! host KeyEvent → ShortcutRegistry::dispatch(event, open screen) → actions
//! ```

mod chord;
mod config;
mod registry;
mod shortcut;
mod types;

pub use chord::{Chord, ChordKey};
pub use config::{
    load_shortcuts_file, parse_chord_string, parse_shortcuts_yaml, ShortcutBinding,
    ShortcutConfigError,
};
pub use registry::ShortcutRegistry;
pub use shortcut::{Action, Shortcut};
pub use types::{Key, KeyEvent, Modifiers};
