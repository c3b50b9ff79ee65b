//! Shortcut entity: chord alternatives bound to an action

use std::fmt;

use super::chord::Chord;
use super::types::KeyEvent;

/// Action invoked when a shortcut fires
pub type Action = Box<dyn FnMut()>;

/// A registered keyboard shortcut
///
/// Holds an ordered list of chord alternatives (any of them triggers the
/// action), a human-readable description for help surfaces, and an optional
/// screen scope. Scoped shortcuts only fire while their screen is open;
/// unscoped ones are global.
pub struct Shortcut {
    chords: Vec<Chord>,
    action: Action,
    description: String,
    screen: Option<String>,
}

impl Shortcut {
    pub fn new(
        chords: Vec<Chord>,
        action: Action,
        description: impl Into<String>,
        screen: Option<String>,
    ) -> Self {
        Self {
            chords,
            action,
            description: description.into(),
            screen,
        }
    }

    /// The ordered chord alternatives
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Human-readable description (shown to the user)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Screen scope, None for global shortcuts
    pub fn screen(&self) -> Option<&str> {
        self.screen.as_deref()
    }

    /// Whether this shortcut is eligible while the given screen is open
    ///
    /// Global shortcuts are eligible everywhere, including when no screen
    /// is open yet.
    pub fn in_scope(&self, open_screen: Option<&str>) -> bool {
        match self.screen.as_deref() {
            None => true,
            Some(scope) => open_screen == Some(scope),
        }
    }

    /// Run the action if any chord alternative matches the event
    ///
    /// At most one invocation per event: the first matching alternative
    /// triggers, later alternatives are not consulted.
    pub fn trigger_if_match(&mut self, event: &KeyEvent) -> bool {
        if self.chords.iter().any(|chord| chord.matches(event)) {
            (self.action)();
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("chords", &self.chords)
            .field("description", &self.description)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}
