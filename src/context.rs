//! Application shell context owning both registries
//!
//! One explicitly constructed `AppShell` replaces module-global singletons:
//! the application creates it at startup and hands it (or parts of it) to
//! whichever components need navigation or shortcut registration.

use crate::screen::ScreenManager;
use crate::shortcuts::{KeyEvent, ShortcutRegistry};

/// The shell core: screen navigation plus keyboard shortcuts
///
/// Fields are public on purpose — hosts register screens through
/// `shell.screens` and shortcuts through `shell.shortcuts`; the context
/// only adds the glue that needs both halves.
#[derive(Default)]
pub struct AppShell {
    pub screens: ScreenManager,
    pub shortcuts: ShortcutRegistry,
}

impl AppShell {
    /// Create an empty shell
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a key-down event from the host's input system
    ///
    /// Resolves the currently open screen (none during startup), then
    /// dispatches to every eligible shortcut. Synchronous and
    /// non-reentrant: actions run inline before this returns. Returns the
    /// number of shortcuts that fired.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> usize {
        let open_screen = self.screens.open_screen();
        self.shortcuts.dispatch(event, open_screen)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::screen::renderer;
    use crate::shortcuts::{Chord, Key, KeyEvent, Modifiers};

    #[test]
    fn test_dispatch_uses_open_screen_for_scoping() {
        let mut shell = AppShell::new();
        shell
            .screens
            .create_screen(
                "players",
                "Alt Manager",
                true,
                renderer(|_surface, _params| Box::pin(async { Ok(()) })),
            )
            .unwrap();

        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        shell.shortcuts.register(
            vec![Chord::new(Modifiers::CTRL, Key::A)],
            move || counter.set(counter.get() + 1),
            "select all players",
            Some("players"),
        );

        let event = KeyEvent::for_key(Key::A, Modifiers::CTRL);

        // No screen open yet: scoped shortcut must stay silent
        assert_eq!(shell.handle_key_event(&event), 0);

        block_on(shell.screens.open("players", None)).unwrap();
        assert_eq!(shell.handle_key_event(&event), 1);
        assert_eq!(count.get(), 1);
    }
}
