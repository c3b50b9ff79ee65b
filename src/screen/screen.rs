//! Screen entity: surface ownership and the per-screen lifecycle

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use tracing::trace;

/// Boxed future returned by a screen renderer
///
/// Boxed so the renderer type stays dyn-compatible; not `Send` because the
/// shell is single-threaded and renderers may hold surface borrows across
/// await points.
pub type RenderFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>;

/// Screen render function
///
/// Invoked with the screen's private surface and optional open parameters.
/// Runs to completion before the screen is marked open.
pub type Renderer = Box<dyn for<'a> FnMut(&'a mut Surface, Option<&'a Value>) -> RenderFuture<'a>>;

/// Wrap a closure as a boxed [`Renderer`]
///
/// Exists to guide closure signature inference; hosts write
/// `renderer(|surface, params| Box::pin(async move { ... }))`.
pub fn renderer<F>(f: F) -> Renderer
where
    F: for<'a> FnMut(&'a mut Surface, Option<&'a Value>) -> RenderFuture<'a> + 'static,
{
    Box::new(f)
}

/// The exclusive presentation area owned by one screen
///
/// The core treats content as an ordered list of opaque blocks; what a
/// block means (a card, a paragraph, a widget tree) is the host's business.
/// A surface is never shared between screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    blocks: Vec<String>,
}

impl Surface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a content block
    pub fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// The surface content in insertion order
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Whether the surface holds no content
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One top-level named view with its own lifecycle and surface
///
/// State machine: Closed → Open via the manager's open (render if
/// ephemeral, then attach/reveal); Open → Closed via close (drop the
/// surface if ephemeral, else keep it hidden). Screens are created once at
/// registration and live for the process lifetime.
pub struct Screen {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) ephemeral: bool,
    pub(crate) renderer: Renderer,
    pub(crate) open: bool,
    /// Whether a persistent screen's one-time render has happened
    pub(crate) rendered: bool,
    /// None only for an ephemeral screen while closed
    pub(crate) surface: Option<Surface>,
}

impl Screen {
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        ephemeral: bool,
        renderer: Renderer,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ephemeral,
            renderer,
            open: false,
            rendered: false,
            // Initial surface is allocated at registration, even for
            // ephemeral screens; it is recycled from the first close on.
            surface: Some(Surface::new()),
        }
    }

    /// Unique screen id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title, applied to the host window title on open
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the surface is discarded and rebuilt on every open
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    /// Whether the screen is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The screen's surface
    ///
    /// Fails for an ephemeral screen that has been closed: its surface is
    /// destroyed on close and only recreated by the next open. Hitting
    /// this error indicates a lifecycle-ordering bug in the host.
    pub fn surface(&self) -> Result<&Surface, ScreenError> {
        self.surface
            .as_ref()
            .ok_or_else(|| ScreenError::SurfaceUninitialised(self.id.clone()))
    }

    /// Open → Closed transition
    ///
    /// No-op when already closed. Ephemeral screens drop their surface;
    /// persistent screens keep it for the next reveal.
    pub(crate) fn close(&mut self) {
        if !self.open {
            return;
        }
        if self.ephemeral {
            self.surface = None;
        }
        self.open = false;
        trace!(screen = %self.id, "screen closed");
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("ephemeral", &self.ephemeral)
            .field("open", &self.open)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

/// Errors surfaced by the screen manager
#[derive(Debug, Clone)]
pub enum ScreenError {
    /// A screen with this id is already registered
    AlreadyRegistered(String),
    /// open() was called with an unregistered id
    UnknownScreen(String),
    /// Surface access on a closed ephemeral screen
    SurfaceUninitialised(String),
    /// The screen's renderer returned an error; no transition committed
    RenderFailed { screen: String, message: String },
}

impl std::fmt::Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenError::AlreadyRegistered(id) => write!(f, "screen {}: already exists", id),
            ScreenError::UnknownScreen(id) => write!(f, "screen {}: not registered", id),
            ScreenError::SurfaceUninitialised(id) => {
                write!(f, "screen {}: surface not initialised", id)
            }
            ScreenError::RenderFailed { screen, message } => {
                write!(f, "screen {}: render failed: {}", screen, message)
            }
        }
    }
}

impl std::error::Error for ScreenError {}
