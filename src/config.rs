//! Session configuration.
//!
//! The only knob the core has is the grid size, fixed when a session opens.
//! It can be set in code or adjusted with Vim-style `:set` arguments:
//!
//! | Syntax         | Abbrev    | Effect             | Default |
//! |----------------|-----------|--------------------|---------|
//! | `columns=N`    | `co=N`    | grid width         | 80      |
//! | `lines=N`      |           | grid height        | 24      |
//! | `size=CxR`     |           | both at once       | `80x24` |
//!
//! ```
//! use n_grid::config::SessionConfig;
//!
//! let mut config = SessionConfig::default();
//! config.apply_set("columns=100 lines=30").unwrap();
//! assert_eq!(config.grid.cols, 100);
//! assert_eq!(config.grid.rows, 30);
//! ```

use n_screen::GridSize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Option {0} requires a value")]
    MissingValue(String),

    #[error("Invalid value for {option}: {value}")]
    InvalidValue { option: String, value: String },

    #[error("Grid size {0} has a zero dimension")]
    EmptyGrid(GridSize),
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Grid dimensions handed to the engine's frame and the screen buffer.
    pub grid: GridSize,
}

impl SessionConfig {
    /// Replace the grid size.
    #[must_use]
    pub const fn with_grid(mut self, grid: GridSize) -> Self {
        self.grid = grid;
        self
    }

    /// Check that the configuration can back a session.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyGrid`] if the grid has zero columns or rows.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.is_empty() {
            return Err(ConfigError::EmptyGrid(self.grid));
        }
        Ok(())
    }

    /// Apply space-separated `name=value` settings.
    ///
    /// Settings are applied left to right; on error, settings before the
    /// bad one stay applied.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for an unknown name, a missing value, or a value that
    /// is not a positive size.
    pub fn apply_set(&mut self, args: &str) -> Result<(), ConfigError> {
        args.split_whitespace().try_for_each(|arg| self.apply_one(arg))
    }

    fn apply_one(&mut self, arg: &str) -> Result<(), ConfigError> {
        let (name, value) = arg.split_once('=').unwrap_or((arg, ""));
        if !is_known_option(name) {
            return Err(ConfigError::UnknownOption(name.to_owned()));
        }
        if value.is_empty() {
            return Err(ConfigError::MissingValue(name.to_owned()));
        }
        let invalid = || ConfigError::InvalidValue {
            option: name.to_owned(),
            value: value.to_owned(),
        };

        match name {
            "columns" | "co" => self.grid.cols = parse_dimension(value).ok_or_else(invalid)?,
            "lines" => self.grid.rows = parse_dimension(value).ok_or_else(invalid)?,
            _ => self.grid = value.parse().map_err(|_| invalid())?,
        }
        Ok(())
    }
}

/// Returns `true` if `name` is a known option (full name or abbreviation).
#[must_use]
pub fn is_known_option(name: &str) -> bool {
    matches!(name, "columns" | "co" | "lines" | "size")
}

fn parse_dimension(value: &str) -> Option<u16> {
    value.parse::<u16>().ok().filter(|&n| n > 0)
}
