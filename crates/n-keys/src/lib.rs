//! # n-keys — Key encoder for n-grid
//!
//! Translates raw key presses into the canonical action vocabulary the
//! editing engine consumes:
//!
//! - **[`encode`]** — `RawKeyInput` → `KeyAction` (`Letter_a`, `Ctrl_shift_left`, `F5`, ...)
//! - **[`keymap`]** — the immutable lookup tables behind the encoder
//!
//! Encoding is a total, pure function. An empty [`KeyAction`] means the
//! press has no meaning for the engine and must not be forwarded.

pub mod encode;
pub mod keymap;

pub use encode::{KeyAction, Modifiers, RawKeyInput, encode};
