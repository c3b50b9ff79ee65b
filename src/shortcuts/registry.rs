//! Shortcut registry: registration, scoping, and event dispatch

use tracing::{debug, trace};

use super::chord::Chord;
use super::shortcut::{Action, Shortcut};
use super::types::KeyEvent;

/// Owns the set of registered shortcuts and resolves key events to actions
///
/// Shortcuts live for the registry's lifetime; there is no removal. The
/// registry itself knows nothing about screens beyond the id of whichever
/// one is currently open, passed in at dispatch time.
#[derive(Debug, Default)]
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a keyboard shortcut
    ///
    /// Duplicate registration — the identical ordered chord list in the
    /// identical scope — is a silent no-op, so feature code may register
    /// defensively. The comparison is position-sensitive over the full
    /// list: `[ctrl+s, ctrl+shift+s]` and `[ctrl+shift+s, ctrl+s]` are
    /// distinct.
    pub fn register(
        &mut self,
        chords: Vec<Chord>,
        action: impl FnMut() + 'static,
        description: impl Into<String>,
        screen: Option<&str>,
    ) {
        if self.is_duplicate(&chords, screen) {
            debug!(scope = screen.unwrap_or("global"), "duplicate shortcut registration ignored");
            return;
        }
        let shortcut = Shortcut::new(
            chords,
            Box::new(action) as Action,
            description,
            screen.map(str::to_string),
        );
        trace!(shortcut = ?shortcut, "registered shortcut");
        self.shortcuts.push(shortcut);
    }

    fn is_duplicate(&self, chords: &[Chord], screen: Option<&str>) -> bool {
        self.shortcuts
            .iter()
            .filter(|s| s.screen() == screen)
            .any(|s| s.chords() == chords)
    }

    /// All shortcuts eligible for a screen, including global ones
    pub fn shortcuts_for_screen(&self, screen: Option<&str>) -> Vec<&Shortcut> {
        self.shortcuts
            .iter()
            .filter(|s| s.in_scope(screen))
            .collect()
    }

    /// Resolve a key event against every eligible shortcut
    ///
    /// Each eligible shortcut is evaluated independently: several distinct
    /// shortcuts may all fire on one event, but each fires at most once.
    /// Dispatch is synchronous; actions run inline before this returns.
    /// Returns the number of shortcuts that fired.
    pub fn dispatch(&mut self, event: &KeyEvent, open_screen: Option<&str>) -> usize {
        let mut fired = 0;
        for shortcut in &mut self.shortcuts {
            if shortcut.in_scope(open_screen) && shortcut.trigger_if_match(event) {
                trace!(description = shortcut.description(), "shortcut fired");
                fired += 1;
            }
        }
        fired
    }

    /// Number of registered shortcuts
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    /// Whether no shortcuts are registered
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
