//! Screen manager: registration, navigation, and the single-open invariant

use serde_json::Value;
use tracing::{debug, trace};

use super::screen::{Renderer, Screen, ScreenError, Surface};

/// The single shared visible-surface container
///
/// Hosts whichever screen is currently attached and carries the window
/// title. Exclusively mutated by [`ScreenManager`]; no other component may
/// attach or detach from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewHost {
    title: String,
    attached: Option<String>,
}

impl ViewHost {
    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Id of the screen occupying the visible slot, if any
    pub fn attached(&self) -> Option<&str> {
        self.attached.as_deref()
    }

    fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn attach(&mut self, id: &str) {
        self.attached = Some(id.to_string());
    }

    fn detach(&mut self) {
        self.attached = None;
    }
}

/// Single source of truth for which view is currently visible
///
/// Owns the registered screens, enforces "at most one screen open at a
/// time", and recycles ephemeral surfaces. Opens are serialized by the
/// `&mut self` receiver: a second open cannot begin while another is
/// mid-flight on the same manager. If an in-flight open's future is dropped
/// before completion nothing is committed — the previously open screen
/// stays open and attached, so the open that completes last wins.
#[derive(Default)]
pub struct ScreenManager {
    screens: Vec<Screen>,
    host: Option<ViewHost>,
}

impl ScreenManager {
    /// Create a manager with no screens registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new screen
    ///
    /// Allocates the screen's initial surface. Fails with
    /// [`ScreenError::AlreadyRegistered`] if the id is taken; the failure
    /// is fatal to this call only.
    pub fn create_screen(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        ephemeral: bool,
        renderer: Renderer,
    ) -> Result<(), ScreenError> {
        let id = id.into();
        if self.index_of(&id).is_some() {
            return Err(ScreenError::AlreadyRegistered(id));
        }
        debug!(screen = %id, ephemeral, "screen registered");
        self.screens.push(Screen::new(id, title, ephemeral, renderer));
        Ok(())
    }

    /// Open a screen, closing whichever screen is currently open
    ///
    /// No-op if the target is already open (the renderer is not re-run).
    /// Ephemeral screens render to completion against a fresh surface
    /// before anything is detached, so the previous screen stays visible
    /// until the new content is ready. Persistent screens render once, on
    /// their first open, and every later open just reveals the surface
    /// they already hold.
    pub async fn open(&mut self, id: &str, params: Option<Value>) -> Result<(), ScreenError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| ScreenError::UnknownScreen(id.to_string()))?;

        if self.screens[idx].open {
            trace!(screen = id, "open ignored: screen already open");
            return Ok(());
        }

        let title = self.screens[idx].title.clone();
        self.container().set_title(title);

        if self.screens[idx].ephemeral {
            let mut surface = Surface::new();
            {
                let screen = &mut self.screens[idx];
                (screen.renderer)(&mut surface, params.as_ref())
                    .await
                    .map_err(|e| ScreenError::RenderFailed {
                        screen: screen.id.clone(),
                        message: format!("{:#}", e),
                    })?;
            }
            self.close_all();
            self.screens[idx].surface = Some(surface);
        } else {
            let screen = &mut self.screens[idx];
            if !screen.rendered {
                // Persistent screens keep their registration-time surface,
                // so the one-time render happens in place.
                if let Some(surface) = screen.surface.as_mut() {
                    (screen.renderer)(surface, params.as_ref())
                        .await
                        .map_err(|e| ScreenError::RenderFailed {
                            screen: id.to_string(),
                            message: format!("{:#}", e),
                        })?;
                }
                screen.rendered = true;
            }
            self.close_all();
        }

        self.container().attach(id);
        self.screens[idx].open = true;
        debug!(screen = id, "screen opened");
        Ok(())
    }

    /// Close every open screen and empty the visible slot
    pub fn close_all(&mut self) {
        for screen in &mut self.screens {
            screen.close();
        }
        if let Some(host) = self.host.as_mut() {
            host.detach();
        }
    }

    /// Id of the currently open screen
    ///
    /// None before the first open completes (e.g. during startup).
    pub fn open_screen(&self) -> Option<&str> {
        self.screens
            .iter()
            .find(|s| s.open)
            .map(|s| s.id.as_str())
    }

    /// Look up a registered screen by id
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.index_of(id).map(|idx| &self.screens[idx])
    }

    /// The visible-surface container, created once on first access
    pub fn container(&mut self) -> &mut ViewHost {
        self.host.get_or_insert_with(ViewHost::default)
    }

    /// The visible-surface container, if it has been initialized
    pub fn host(&self) -> Option<&ViewHost> {
        self.host.as_ref()
    }

    /// Current window title, if the container exists
    pub fn window_title(&self) -> Option<&str> {
        self.host.as_ref().map(ViewHost::title)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.id == id)
    }
}
