//! Shortcut dispatch integration tests
//!
//! Exercises the registry through the shell context: exact-modifier chord
//! matching, screen scoping against the open screen, and YAML bindings
//! resolved to live actions.

mod common;

use common::{counter_action, demo_shell};

use futures::executor::block_on;

use altshell::shortcuts::parse_shortcuts_yaml;
use altshell::{Chord, Key, KeyEvent, Modifiers};

fn ctrl(key: Key) -> Chord {
    Chord::new(Modifiers::CTRL, key)
}

// ========================================================================
// Chord matching
// ========================================================================

#[test]
fn test_modifier_match_is_exact() {
    let (mut shell, _) = demo_shell();
    let (save_count, save_action) = counter_action();
    let (save_as_count, save_as_action) = counter_action();

    shell
        .shortcuts
        .register(vec![ctrl(Key::S)], save_action, "save", None);
    shell.shortcuts.register(
        vec![Chord::new(Modifiers::CTRL | Modifiers::SHIFT, Key::S)],
        save_as_action,
        "save as",
        None,
    );

    shell.handle_key_event(&KeyEvent::for_key(Key::S, Modifiers::CTRL | Modifiers::SHIFT));
    assert_eq!(save_count.get(), 0);
    assert_eq!(save_as_count.get(), 1);

    shell.handle_key_event(&KeyEvent::for_key(Key::S, Modifiers::CTRL));
    assert_eq!(save_count.get(), 1);
    assert_eq!(save_as_count.get(), 1);
}

#[test]
fn test_any_chord_alternative_fires_once() {
    let (mut shell, _) = demo_shell();
    let (count, action) = counter_action();

    shell.shortcuts.register(
        vec![ctrl(Key::K), Chord::new(Modifiers::NONE, Key::F1)],
        action,
        "help",
        None,
    );

    shell.handle_key_event(&KeyEvent::for_key(Key::K, Modifiers::CTRL));
    assert_eq!(count.get(), 1);

    shell.handle_key_event(&KeyEvent::for_key(Key::F1, Modifiers::NONE));
    assert_eq!(count.get(), 2);

    // Unbound chord leaves it alone
    shell.handle_key_event(&KeyEvent::for_key(Key::K, Modifiers::NONE));
    assert_eq!(count.get(), 2);
}

// ========================================================================
// Scoping against the open screen
// ========================================================================

#[test]
fn test_scoped_shortcut_follows_open_screen() {
    let (mut shell, _) = demo_shell();
    let (count, action) = counter_action();

    shell
        .shortcuts
        .register(vec![ctrl(Key::A)], action, "select all", Some("players"));

    let select_all = KeyEvent::for_key(Key::A, Modifiers::CTRL);

    // Nothing open yet
    assert_eq!(shell.handle_key_event(&select_all), 0);

    block_on(shell.screens.open("players", None)).unwrap();
    assert_eq!(shell.handle_key_event(&select_all), 1);
    assert_eq!(count.get(), 1);

    block_on(shell.screens.open("settings", None)).unwrap();
    assert_eq!(shell.handle_key_event(&select_all), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_global_shortcut_fires_on_every_screen() {
    let (mut shell, _) = demo_shell();
    let (count, action) = counter_action();

    shell
        .shortcuts
        .register(vec![ctrl(Key::G)], action, "global", None);

    let event = KeyEvent::for_key(Key::G, Modifiers::CTRL);

    shell.handle_key_event(&event);
    block_on(shell.screens.open("players", None)).unwrap();
    shell.handle_key_event(&event);
    block_on(shell.screens.open("settings", None)).unwrap();
    shell.handle_key_event(&event);

    assert_eq!(count.get(), 3);
}

#[test]
fn test_scoped_and_global_both_fire() {
    let (mut shell, _) = demo_shell();
    let (scoped_count, scoped_action) = counter_action();
    let (global_count, global_action) = counter_action();

    shell
        .shortcuts
        .register(vec![ctrl(Key::A)], scoped_action, "scoped", Some("players"));
    shell
        .shortcuts
        .register(vec![ctrl(Key::A)], global_action, "global", None);

    block_on(shell.screens.open("players", None)).unwrap();
    let fired = shell.handle_key_event(&KeyEvent::for_key(Key::A, Modifiers::CTRL));

    assert_eq!(fired, 2);
    assert_eq!(scoped_count.get(), 1);
    assert_eq!(global_count.get(), 1);
}

// ========================================================================
// Duplicate registration
// ========================================================================

#[test]
fn test_duplicate_registration_keeps_first_action() {
    let (mut shell, _) = demo_shell();
    let (first_count, first_action) = counter_action();
    let (second_count, second_action) = counter_action();

    shell
        .shortcuts
        .register(vec![ctrl(Key::A)], first_action, "first", Some("players"));
    shell
        .shortcuts
        .register(vec![ctrl(Key::A)], second_action, "second", Some("players"));
    assert_eq!(shell.shortcuts.len(), 1);

    block_on(shell.screens.open("players", None)).unwrap();
    shell.handle_key_event(&KeyEvent::for_key(Key::A, Modifiers::CTRL));

    assert_eq!(first_count.get(), 1);
    assert_eq!(second_count.get(), 0);
}

#[test]
fn test_reordered_chord_list_is_not_a_duplicate() {
    let (mut shell, _) = demo_shell();

    let save = ctrl(Key::S);
    let save_as = Chord::new(Modifiers::CTRL | Modifiers::SHIFT, Key::S);

    shell
        .shortcuts
        .register(vec![save, save_as], || {}, "one", None);
    shell
        .shortcuts
        .register(vec![save_as, save], || {}, "two", None);

    assert_eq!(shell.shortcuts.len(), 2);
}

// ========================================================================
// YAML bindings
// ========================================================================

#[test]
fn test_yaml_bindings_dispatch_end_to_end() {
    let yaml = r#"
shortcuts:
  - chords: ["ctrl+a"]
    action: select-all
    screen: players
  - chords: ["ctrl+k", "f1"]
    action: show-help
"#;
    let bindings = parse_shortcuts_yaml(yaml).unwrap();

    let (mut shell, _) = demo_shell();
    let (select_count, select_action) = counter_action();
    let (help_count, help_action) = counter_action();

    let mut actions: Vec<Option<Box<dyn FnMut()>>> =
        vec![Some(Box::new(select_action)), Some(Box::new(help_action))];
    for (binding, slot) in bindings.into_iter().zip(actions.iter_mut()) {
        let mut action = slot.take().unwrap();
        shell.shortcuts.register(
            binding.chords,
            move || action(),
            binding.action,
            binding.screen.as_deref(),
        );
    }

    block_on(shell.screens.open("players", None)).unwrap();
    shell.handle_key_event(&KeyEvent::for_key(Key::A, Modifiers::CTRL));
    shell.handle_key_event(&KeyEvent::for_key(Key::F1, Modifiers::NONE));

    assert_eq!(select_count.get(), 1);
    assert_eq!(help_count.get(), 1);

    // The scoped binding goes quiet once players is closed
    block_on(shell.screens.open("settings", None)).unwrap();
    shell.handle_key_event(&KeyEvent::for_key(Key::A, Modifiers::CTRL));
    assert_eq!(select_count.get(), 1);
}
