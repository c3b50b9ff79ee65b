//! altshell - screen navigation and keyboard shortcut core
//!
//! This crate provides the application-shell core for a single-page UI:
//! a screen lifecycle manager (exclusive single-active-view, ephemeral vs.
//! persistent surfaces, async renderers) and a scoped, chord-based keyboard
//! shortcut engine. Rendering, styling, and data fetching belong to the
//! host; it talks to this core through three narrow contracts: register a
//! screen renderer, open a screen by id, register a shortcut.

pub mod config_paths;
pub mod context;
pub mod nav;
pub mod screen;
pub mod shortcuts;
pub mod tracing;

// Re-export commonly used types
pub use context::AppShell;
pub use nav::{NavItem, NavModel};
pub use screen::{renderer, ScreenError, ScreenManager, Surface};
pub use shortcuts::{Chord, Key, KeyEvent, Modifiers, ShortcutRegistry};
