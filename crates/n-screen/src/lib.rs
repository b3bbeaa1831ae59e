// SPDX-License-Identifier: MIT
//
// n-screen — Screen buffer and segment renderer for n-grid.
//
// The editing engine describes the screen as a stream of sparse paint
// events. This crate keeps the resulting character grid and, after each
// batch, computes the minimal same-style runs needed to redraw only the
// rows that changed. Turning those runs into visible output is left to a
// presentation adapter; `ansi` is the terminal one.
//
// Colors are symbolic names from a fixed palette, never RGB. Malformed or
// out-of-grid paint events are rejected, never clamped.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod error;
pub mod paint;
pub mod segment;

pub use buffer::{GridSize, ScreenBuffer};
pub use cell::Cell;
pub use color::ColorName;
pub use error::ScreenError;
pub use paint::{PaintEvent, WireEvent, decode_batch};
pub use segment::{RowUpdate, Segment, SegmentRenderer, TouchedRows};
