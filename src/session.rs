//! The controller: one editing session on one grid.
//!
//! Each key press flows through:
//!
//! ```text
//!   RawKeyInput → encode → KeyAction → Engine::accept_key_event
//!       → PaintEvent batch → SegmentRenderer → RowUpdate per touched row
//! ```
//!
//! The session owns the engine, its editor and frame handles, and the
//! screen. Everything runs on the caller's thread, one event at a time.

use n_keys::{KeyAction, RawKeyInput, encode};
use n_screen::{PaintEvent, RowUpdate, ScreenError, SegmentRenderer};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{ConfigError, SessionConfig};
use crate::engine::{Document, Engine};

/// Why a session call failed.
#[derive(Debug, Error)]
pub enum SessionError<E: std::error::Error + 'static> {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("engine error: {0}")]
    Engine(#[source] E),

    #[error("screen error: {0}")]
    Screen(#[from] ScreenError),
}

/// An open editing session.
pub struct Session<E: Engine> {
    engine: E,
    editor: E::Editor,
    frame: E::Frame,
    screen: SegmentRenderer,
}

impl<E: Engine> Session<E> {
    /// Open `document` and draw the first frame.
    ///
    /// Returns the session together with the initial screen: every row of
    /// the grid, so the host can lay out rows the engine did not paint.
    ///
    /// # Errors
    ///
    /// [`SessionError::Config`] if the grid has a zero dimension, checked
    /// before the engine is touched; [`SessionError::Engine`] if the engine
    /// fails to create the editor, the frame, or the first paint;
    /// [`SessionError::Screen`] if that paint does not fit the grid.
    pub fn open(
        mut engine: E,
        config: SessionConfig,
        document: &Document,
    ) -> Result<(Self, Vec<RowUpdate>), SessionError<E::Error>> {
        config.validate()?;
        let editor = engine
            .create_editor(document)
            .map_err(SessionError::Engine)?;
        let frame = engine
            .create_frame(config.grid)
            .map_err(SessionError::Engine)?;
        debug!(filename = %document.filename, grid = %config.grid, "session opened");

        let mut session = Self {
            engine,
            editor,
            frame,
            screen: SegmentRenderer::new(config.grid),
        };
        session.refresh()?;
        let initial = session.screen.snapshot();
        Ok((session, initial))
    }

    /// Handle one key press.
    ///
    /// A press that encodes to no action is swallowed: the engine is not
    /// called and nothing is redrawn.
    ///
    /// # Errors
    ///
    /// As for [`open`](Self::open). A rejected paint batch leaves the screen
    /// unchanged.
    pub fn handle_key(
        &mut self,
        input: &RawKeyInput,
    ) -> Result<Vec<RowUpdate>, SessionError<E::Error>> {
        let action = encode(input);
        if action.is_none() {
            trace!(value = ?input.value, code = input.code, "key has no action");
            return Ok(Vec::new());
        }
        self.dispatch(&action)
    }

    /// Send an already-encoded action to the engine.
    ///
    /// # Errors
    ///
    /// As for [`handle_key`](Self::handle_key).
    pub fn dispatch(&mut self, action: &KeyAction) -> Result<Vec<RowUpdate>, SessionError<E::Error>> {
        if action.is_none() {
            return Ok(Vec::new());
        }
        debug!(%action, "forwarding key action");
        let events = self
            .engine
            .accept_key_event(&mut self.editor, &mut self.frame, action)
            .map_err(SessionError::Engine)?;
        self.paint(&events)
    }

    /// Ask the engine to repaint without changing the document.
    ///
    /// # Errors
    ///
    /// As for [`handle_key`](Self::handle_key).
    pub fn refresh(&mut self) -> Result<Vec<RowUpdate>, SessionError<E::Error>> {
        let events = self
            .engine
            .rerender(&mut self.editor, &mut self.frame)
            .map_err(SessionError::Engine)?;
        self.paint(&events)
    }

    /// The engine's text of the open document.
    ///
    /// # Errors
    ///
    /// [`SessionError::Engine`] if the engine cannot produce it.
    pub fn document_text(&mut self) -> Result<String, SessionError<E::Error>> {
        self.engine
            .document_text(&self.editor)
            .map_err(SessionError::Engine)
    }

    /// The screen state.
    #[must_use]
    pub const fn screen(&self) -> &SegmentRenderer {
        &self.screen
    }

    /// The engine, for host-specific queries.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// End the session and hand the engine back.
    #[must_use]
    pub fn close(self) -> E {
        self.engine
    }

    fn paint(&mut self, events: &[PaintEvent]) -> Result<Vec<RowUpdate>, SessionError<E::Error>> {
        Ok(self.screen.render(events)?)
    }
}
