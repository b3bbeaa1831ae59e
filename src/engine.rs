//! The editing engine seam.
//!
//! The engine owns everything about text: buffers, cursor, undo, files. It
//! is opaque to this crate. What it exposes is a handful of calls: create an
//! editor for a document, create a frame of a given size, feed a key action,
//! ask for a repaint, and read back the document text. Key actions and
//! repaints answer with an ordered batch of [`PaintEvent`]s.
//!
//! Hosts adapt their engine binding to [`Engine`]; the [`Session`](crate::Session)
//! drives it.

use n_keys::KeyAction;
use n_screen::{GridSize, PaintEvent};

/// A document to open in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Name the engine uses for the buffer (and to pick a syntax).
    pub filename: String,
    /// Initial contents.
    pub contents: String,
}

impl Document {
    /// Create a document.
    #[must_use]
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// An external editing engine.
///
/// Calls are synchronous and run to completion; the engine is never called
/// re-entrantly.
pub trait Engine {
    /// Handle to an open editor (document + editing state).
    type Editor;
    /// Handle to a frame (the engine's view of the grid).
    type Frame;
    /// Engine failure.
    type Error: std::error::Error + 'static;

    /// Open `document` in a new editor.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn create_editor(&mut self, document: &Document) -> Result<Self::Editor, Self::Error>;

    /// Create a frame covering `size`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn create_frame(&mut self, size: GridSize) -> Result<Self::Frame, Self::Error>;

    /// Apply a non-empty key action and return the resulting paint events.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn accept_key_event(
        &mut self,
        editor: &mut Self::Editor,
        frame: &mut Self::Frame,
        action: &KeyAction,
    ) -> Result<Vec<PaintEvent>, Self::Error>;

    /// Repaint the current state without changing the document.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn rerender(
        &mut self,
        editor: &mut Self::Editor,
        frame: &mut Self::Frame,
    ) -> Result<Vec<PaintEvent>, Self::Error>;

    /// The full text of the document open in `editor`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn document_text(&mut self, editor: &Self::Editor) -> Result<String, Self::Error>;
}
