//! Demo host driving the shell core
//!
//! Wires up a small alt-manager UI: a persistent loading screen plus
//! ephemeral players/player/settings screens, a navigation bar, and a
//! handful of shortcuts. A scripted key-event session stands in for a
//! real input loop; each screen renders text blocks to stdout.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use clap::Parser;
use futures::executor::block_on;
use serde_json::{json, Value};
use tracing::{info, warn};

use altshell::shortcuts::{load_shortcuts_file, Chord, ShortcutBinding};
use altshell::{renderer, AppShell, Key, KeyEvent, Modifiers, NavItem, NavModel};

/// A screen shell demo
#[derive(Parser, Debug)]
#[command(name = "altshell", version, about = "Screen navigation and shortcut demo")]
struct CliArgs {
    /// Shortcut bindings file (defaults to shortcuts.yaml in the config dir)
    #[arg(long, value_name = "PATH")]
    shortcuts: Option<PathBuf>,

    /// Only show players with this status (online/offline)
    #[arg(long, value_name = "STATUS")]
    filter: Option<String>,
}

/// Navigation request queued by a shortcut action
///
/// Actions cannot call into the screen manager directly (they run while
/// the shell is borrowed for dispatch), so they send the target here and
/// the host loop drains the queue afterwards.
type NavRequest = (String, Option<Value>);

fn sample_players() -> Value {
    json!([
        { "name": "Player1", "status": "online", "version": "1.16.5", "server": "play.hypixel.net" },
        { "name": "Player2", "status": "online", "version": "1.19.4", "server": "play.someserver.com" },
        { "name": "Player3", "status": "online", "version": "1.19.2", "server": "127.0.0.1:25530" },
        { "name": "Player4", "status": "online", "version": "1.8.9", "server": "localhost:25565" },
        { "name": "Player5", "status": "offline" },
        { "name": "Player6", "status": "offline" }
    ])
}

fn register_screens(shell: &mut AppShell) -> Result<()> {
    shell.screens.create_screen(
        "loading",
        "Alt Manager",
        false,
        renderer(|surface, _params| {
            Box::pin(async move {
                surface.push("Loading…");
                Ok(())
            })
        }),
    )?;

    shell.screens.create_screen(
        "players",
        "Alt Manager",
        true,
        renderer(|surface, params| {
            Box::pin(async move {
                let filter = params
                    .and_then(|p| p.get("filter"))
                    .and_then(Value::as_str)
                    .map(str::to_string);

                let players = sample_players();
                for player in players.as_array().into_iter().flatten() {
                    let status = player["status"].as_str().unwrap_or("offline");
                    if filter.as_deref().is_some_and(|f| f != status) {
                        continue;
                    }
                    let name = player["name"].as_str().unwrap_or("?");
                    let line = match player["server"].as_str() {
                        Some(server) => format!("{} · {} · {}", name, status, server),
                        None => format!("{} · {}", name, status),
                    };
                    surface.push(line);
                }
                surface.push("+ Add new");
                Ok(())
            })
        }),
    )?;

    shell.screens.create_screen(
        "player",
        "Alt Manager",
        true,
        renderer(|surface, params| {
            Box::pin(async move {
                let player = params.context("player screen opened without a player")?;
                let name = player["name"].as_str().unwrap_or("?");
                let status = player["status"].as_str().unwrap_or("offline");
                surface.push(format!("{} · {}", name, status));
                if let Some(server) = player["server"].as_str() {
                    surface.push(format!("server: {}", server));
                }
                if let Some(version) = player["version"].as_str() {
                    surface.push(format!("version: {}", version));
                }
                Ok(())
            })
        }),
    )?;

    shell.screens.create_screen(
        "settings",
        "Alt Manager | Settings",
        true,
        renderer(|surface, _params| {
            Box::pin(async move {
                surface.push("Settings");
                Ok(())
            })
        }),
    )?;

    Ok(())
}

/// Resolve named actions from a bindings file to callbacks
///
/// Unknown action names are skipped with a warning so an edited bindings
/// file cannot take the whole shell down.
fn register_config_shortcuts(
    shell: &mut AppShell,
    bindings: Vec<ShortcutBinding>,
    nav_tx: &Sender<NavRequest>,
    all_selected: &Rc<Cell<bool>>,
) {
    for binding in bindings {
        let ShortcutBinding {
            chords,
            action,
            screen,
        } = binding;
        match action.as_str() {
            "open-players" => {
                let tx = nav_tx.clone();
                shell.shortcuts.register(
                    chords,
                    move || {
                        let _ = tx.send(("players".to_string(), None));
                    },
                    "Open players",
                    screen.as_deref(),
                );
            }
            "open-settings" => {
                let tx = nav_tx.clone();
                shell.shortcuts.register(
                    chords,
                    move || {
                        let _ = tx.send(("settings".to_string(), None));
                    },
                    "Open settings",
                    screen.as_deref(),
                );
            }
            "select-all" => {
                let selected = Rc::clone(all_selected);
                shell.shortcuts.register(
                    chords,
                    move || selected.set(!selected.get()),
                    "Select all players",
                    screen.as_deref(),
                );
            }
            other => warn!(action = other, "unknown action in bindings file, skipped"),
        }
    }
}

fn register_default_shortcuts(
    shell: &mut AppShell,
    nav_tx: &Sender<NavRequest>,
    all_selected: &Rc<Cell<bool>>,
) {
    // Toggles between all and none, like a grid select-all checkbox
    let selected = Rc::clone(all_selected);
    shell.shortcuts.register(
        vec![Chord::new(Modifiers::CTRL, Key::A)],
        move || selected.set(!selected.get()),
        "Select all players",
        Some("players"),
    );

    let tx = nav_tx.clone();
    shell.shortcuts.register(
        vec![Chord::new(Modifiers::NONE, Key::F1)],
        move || {
            let _ = tx.send(("players".to_string(), None));
        },
        "Open players",
        None,
    );

    let tx = nav_tx.clone();
    shell.shortcuts.register(
        vec![Chord::new(Modifiers::NONE, Key::F2)],
        move || {
            let _ = tx.send(("settings".to_string(), None));
        },
        "Open settings",
        None,
    );
}

fn drain_nav_requests(
    shell: &mut AppShell,
    nav: &mut NavModel,
    nav_rx: &Receiver<NavRequest>,
) -> Result<()> {
    while let Ok((screen, params)) = nav_rx.try_recv() {
        block_on(shell.screens.open(&screen, params))?;
        nav.activate_screen(&screen);
    }
    Ok(())
}

fn print_open_screen(shell: &AppShell, nav: &NavModel) {
    let title = shell.screens.window_title().unwrap_or("");
    println!("== {} ==", title);
    for (index, item) in nav.items().iter().enumerate() {
        let marker = if nav.active_index() == Some(index) {
            "*"
        } else {
            " "
        };
        println!(" [{}] {}", marker, item.label);
    }
    let Some(open) = shell.screens.open_screen() else {
        println!(" (no screen open)");
        return;
    };
    if let Some(screen) = shell.screens.screen(open) {
        if let Ok(surface) = screen.surface() {
            for block in surface.blocks() {
                println!("  {}", block);
            }
        }
    }
    println!();
}

fn main() -> Result<()> {
    altshell::tracing::init();
    let args = CliArgs::parse();

    let mut shell = AppShell::new();
    register_screens(&mut shell)?;

    let mut nav = NavModel::new(vec![
        NavItem::new("Players", "players"),
        NavItem::new("Settings", "settings"),
    ]);

    let (nav_tx, nav_rx) = mpsc::channel::<NavRequest>();
    let all_selected = Rc::new(Cell::new(false));

    // Bindings file first, built-in defaults after; rebinding the same
    // chords in the same scope collapses to the file's version
    if let Some(path) = &args.shortcuts {
        let bindings = load_shortcuts_file(path)
            .with_context(|| format!("loading shortcut bindings from {}", path.display()))?;
        register_config_shortcuts(&mut shell, bindings, &nav_tx, &all_selected);
    } else if let Some(path) = altshell::config_paths::shortcuts_file() {
        if path.exists() {
            match load_shortcuts_file(&path) {
                Ok(bindings) => {
                    register_config_shortcuts(&mut shell, bindings, &nav_tx, &all_selected)
                }
                Err(e) => warn!(path = %path.display(), error = %e, "ignoring bindings file"),
            }
        }
    }
    register_default_shortcuts(&mut shell, &nav_tx, &all_selected);
    info!(shortcuts = shell.shortcuts.len(), "shell ready");

    // Scripted session standing in for a real event loop
    block_on(shell.screens.open("loading", None))?;
    print_open_screen(&shell, &nav);

    let params = args.filter.as_deref().map(|f| json!({ "filter": f }));
    block_on(shell.screens.open("players", params))?;
    nav.activate_screen("players");
    print_open_screen(&shell, &nav);

    // ctrl+a is scoped to the players screen, so it fires here
    shell.handle_key_event(&KeyEvent::for_key(Key::A, Modifiers::CTRL));
    println!(
        "select all: {}",
        if all_selected.get() { "on" } else { "off" }
    );

    // Open a player detail screen directly, as a card click would
    let detail = sample_players()[0].clone();
    block_on(shell.screens.open("player", Some(detail)))?;
    nav.clear_active();
    print_open_screen(&shell, &nav);

    // F2 queues a navigation request; the host loop drains it
    shell.handle_key_event(&KeyEvent::for_key(Key::F2, Modifiers::NONE));
    drain_nav_requests(&mut shell, &mut nav, &nav_rx)?;
    print_open_screen(&shell, &nav);

    Ok(())
}
