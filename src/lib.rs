//! # n-grid — Character-grid front end for a remote editing engine
//!
//! The editing engine (buffers, cursor, undo, files) lives elsewhere and is
//! reached through the [`Engine`] trait. This crate is what surrounds it:
//!
//! - **[`n_keys`]** — raw key presses → canonical action tokens
//! - **[`n_screen`]** — paint events → screen buffer → minimal redraw segments
//! - **[`session`]** — the controller tying keys, engine, and screen together
//! - **[`config`]** — grid size and `:set`-style overrides
//!
//! Logging goes through `tracing`; install a subscriber in the host to see it.

pub mod config;
pub mod engine;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use engine::{Document, Engine};
pub use session::{Session, SessionError};

pub use n_keys::{self, KeyAction, Modifiers, RawKeyInput, encode};
pub use n_screen::{self, ColorName, GridSize, PaintEvent, RowUpdate, Segment};
