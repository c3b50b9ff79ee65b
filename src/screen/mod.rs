//! Screen lifecycle management
//!
//! One named screen at a time occupies the visible-surface container; the
//! manager enforces that invariant and recycles ephemeral surfaces.
//!
//! ```text
//! host → ScreenManager::open(id, params) → renderer → attach/reveal
//! ```

#[allow(clippy::module_inception)]
mod screen;
mod manager;

pub use manager::{ScreenManager, ViewHost};
pub use screen::{renderer, RenderFuture, Renderer, Screen, ScreenError, Surface};
