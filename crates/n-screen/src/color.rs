// SPDX-License-Identifier: MIT
//
// Symbolic color palette.
//
// The engine never sends RGB values. It names colors from a small fixed
// palette and leaves the mapping to visual color to the presentation layer
// (CSS classes in a browser host, SGR codes in a terminal host). The grid
// therefore stores names, and two cells share a style exactly when their
// names match.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A color from the engine's fixed palette.
///
/// Parses from and displays as the engine's spelling (`"Grey"`, `"Black"`,
/// ...). `"Gray"` is accepted as an alias on input.
///
/// ```
/// use n_screen::color::ColorName;
///
/// assert_eq!("Grey".parse::<ColorName>().unwrap(), ColorName::Grey);
/// assert_eq!(ColorName::BrightBlue.to_string(), "BrightBlue");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum ColorName {
    /// Whatever the presentation layer considers its default.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[strum(to_string = "Grey", serialize = "Gray")]
    #[serde(alias = "Gray")]
    Grey,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorName {
    /// Index into the 16-color ANSI palette, or `None` for [`Default`](Self::Default).
    ///
    /// `Grey` is ANSI "bright black" (8).
    #[must_use]
    pub const fn ansi_index(self) -> Option<u8> {
        let idx = match self {
            Self::Default => return None,
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
            Self::Grey => 8,
            Self::BrightRed => 9,
            Self::BrightGreen => 10,
            Self::BrightYellow => 11,
            Self::BrightBlue => 12,
            Self::BrightMagenta => 13,
            Self::BrightCyan => 14,
            Self::BrightWhite => 15,
        };
        Some(idx)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
