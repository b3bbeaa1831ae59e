// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while applying or decoding paint events.
///
/// Any of these means the engine and the grid disagree about the screen.
/// They are surfaced, never clamped or ignored.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A paint event addressed a cell outside the configured grid.
    #[error("cell ({row}, {col}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: u16,
        cols: u16,
    },

    /// A paint event is internally inconsistent.
    #[error("malformed paint event: {0}")]
    Malformed(String),

    /// A grid size could not be parsed or is empty.
    #[error("invalid grid size: {0}")]
    InvalidSize(String),

    /// The engine's event batch is not valid JSON for a paint event list.
    #[error("cannot decode paint events: {0}")]
    Decode(#[from] serde_json::Error),
}
