//! YAML configuration parsing for shortcut bindings
//!
//! Parses shortcuts.yaml files into validated chord lists. The file binds
//! named actions (resolved by the host) to chord strings:
//!
//! ```yaml
//! shortcuts:
//!   - chords: ["ctrl+a"]
//!     action: select-all
//!     screen: players
//!   - chords: ["ctrl+k", "f1"]
//!     action: show-help
//! ```

use std::path::Path;

use serde::Deserialize;

use super::chord::Chord;
use super::types::{Key, Modifiers};

/// Root structure of a shortcuts YAML file
#[derive(Debug, Deserialize)]
struct ShortcutsConfig {
    shortcuts: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
struct BindingConfig {
    chords: Vec<String>,
    action: String,
    #[serde(default)]
    screen: Option<String>,
}

/// A parsed, validated shortcut binding
///
/// The action is still a name at this point; hosts resolve it to a callback
/// when registering with the [`ShortcutRegistry`](super::ShortcutRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub chords: Vec<Chord>,
    pub action: String,
    pub screen: Option<String>,
}

/// Load shortcut bindings from a YAML file
pub fn load_shortcuts_file(path: &Path) -> Result<Vec<ShortcutBinding>, ShortcutConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ShortcutConfigError::IoError(e.to_string()))?;

    parse_shortcuts_yaml(&content)
}

/// Parse shortcut bindings from a YAML string
pub fn parse_shortcuts_yaml(yaml: &str) -> Result<Vec<ShortcutBinding>, ShortcutConfigError> {
    let config: ShortcutsConfig =
        serde_yaml::from_str(yaml).map_err(|e| ShortcutConfigError::ParseError(e.to_string()))?;

    let mut bindings = Vec::with_capacity(config.shortcuts.len());
    for entry in config.shortcuts {
        let mut chords = Vec::with_capacity(entry.chords.len());
        for chord_str in &entry.chords {
            chords.push(parse_chord_string(chord_str)?);
        }
        bindings.push(ShortcutBinding {
            chords,
            action: entry.action,
            screen: entry.screen,
        });
    }

    Ok(bindings)
}

/// Parse a chord string like "ctrl+shift+a" into a Chord
///
/// Modifier names (alt/ctrl/shift) accumulate into the modifier set; the
/// remaining part must be exactly one key from the closed key table.
pub fn parse_chord_string(chord_str: &str) -> Result<Chord, ShortcutConfigError> {
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for part in chord_str.split('+') {
        let part_lower = part.trim().to_lowercase();
        match part_lower.as_str() {
            "" => return Err(ShortcutConfigError::EmptyChord(chord_str.to_string())),
            "alt" | "option" | "opt" => {
                mods = mods | Modifiers::ALT;
            }
            "ctrl" | "control" => {
                mods = mods | Modifiers::CTRL;
            }
            "shift" => {
                mods = mods | Modifiers::SHIFT;
            }
            _ => {
                if key.is_some() {
                    return Err(ShortcutConfigError::InvalidKey(format!(
                        "Multiple keys in chord: {}",
                        chord_str
                    )));
                }
                let parsed = Key::from_name(&part_lower).ok_or_else(|| {
                    ShortcutConfigError::InvalidKey(format!("Unknown key: {}", part_lower))
                })?;
                key = Some(parsed);
            }
        }
    }

    let key = key.ok_or_else(|| {
        ShortcutConfigError::EmptyChord(format!("No key found in chord: {}", chord_str))
    })?;

    Ok(Chord { mods, key: Some(key) })
}

/// Errors that can occur when parsing shortcut binding files
#[derive(Debug, Clone)]
pub enum ShortcutConfigError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    EmptyChord(String),
}

impl std::fmt::Display for ShortcutConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortcutConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ShortcutConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ShortcutConfigError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            ShortcutConfigError::EmptyChord(c) => write!(f, "Empty chord: {}", c),
        }
    }
}

impl std::error::Error for ShortcutConfigError {}
