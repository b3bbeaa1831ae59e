// SPDX-License-Identifier: MIT
//
// Cell — one character position on the grid.
//
// A cell is a character plus a foreground and background color name.
// Two sentinel cells matter:
//
//   UNSET  `~` grey-on-black, what a never-painted position reads as
//          (the vi-style empty-line marker)
//   BLANK  ` ` grey-on-black, what fills the gap when a write lands past
//          the current end of a row

use std::fmt;

use crate::color::ColorName;

/// A single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character to display.
    pub ch: char,
    /// Foreground color.
    pub fg: ColorName,
    /// Background color.
    pub bg: ColorName,
}

impl Cell {
    /// Foreground of cells the engine has not styled.
    pub const DEFAULT_FG: ColorName = ColorName::Grey;

    /// Background of cells the engine has not styled.
    pub const DEFAULT_BG: ColorName = ColorName::Black;

    /// A position nothing has painted.
    pub const UNSET: Self = Self::new('~', Self::DEFAULT_FG, Self::DEFAULT_BG);

    /// Padding inserted when a row is extended past its end.
    pub const BLANK: Self = Self::new(' ', Self::DEFAULT_FG, Self::DEFAULT_BG);

    /// Create a cell.
    #[inline]
    #[must_use]
    pub const fn new(ch: char, fg: ColorName, bg: ColorName) -> Self {
        Self { ch, fg, bg }
    }

    /// Whether two cells share `(fg, bg)`, regardless of character.
    #[inline]
    #[must_use]
    pub fn same_style(self, other: Self) -> bool {
        self.fg == other.fg && self.bg == other.bg
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({:?}, {}/{})", self.ch, self.fg, self.bg)
    }
}
