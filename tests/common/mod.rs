//! Shared test fixtures for integration tests

use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;

use altshell::{renderer, AppShell};

/// Build a shell with the demo screen set registered:
/// - "loading": persistent, renders a single "spinner" block
/// - "players": ephemeral, renders one block per open (counts renders)
/// - "settings": ephemeral, renders a "settings" block
///
/// Returns the shell plus the players-screen render counter.
pub fn demo_shell() -> (AppShell, Rc<Cell<u32>>) {
    let mut shell = AppShell::new();
    let render_count = Rc::new(Cell::new(0));

    shell
        .screens
        .create_screen(
            "loading",
            "Alt Manager",
            false,
            renderer(|surface, _params| {
                Box::pin(async move {
                    surface.push("spinner");
                    Ok(())
                })
            }),
        )
        .unwrap();

    let counter = Rc::clone(&render_count);
    shell
        .screens
        .create_screen(
            "players",
            "Alt Manager",
            true,
            renderer(move |surface, params| {
                counter.set(counter.get() + 1);
                let render = counter.get();
                Box::pin(async move {
                    let filter = params
                        .and_then(|p| p.get("filter"))
                        .and_then(Value::as_str)
                        .unwrap_or("all");
                    surface.push(format!("players:{}:render-{}", filter, render));
                    Ok(())
                })
            }),
        )
        .unwrap();

    shell
        .screens
        .create_screen(
            "settings",
            "Alt Manager | Settings",
            true,
            renderer(|surface, _params| {
                Box::pin(async move {
                    surface.push("settings");
                    Ok(())
                })
            }),
        )
        .unwrap();

    (shell, render_count)
}

/// Shared counter plus an action closure that increments it
#[allow(dead_code)]
pub fn counter_action() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move || inner.set(inner.get() + 1))
}
