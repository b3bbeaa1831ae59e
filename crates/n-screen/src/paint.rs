// SPDX-License-Identifier: MIT
//
// Paint events — the engine's instructions for changing the grid.
//
// Two shapes exist. `SetChar` paints one cell. `SetRun` paints `width`
// consecutive cells starting at `(row, col)`, taking characters from `text`
// and padding with spaces once `text` runs out.
//
// On the wire the engine sends JSON objects tagged by a one-letter `t`:
//
//   {"t":"c","x":3,"y":1,"c":"a","fg":"White","bg":"Blue"}
//   {"t":"m","x":0,"y":1,"width":5,"value":"hi","fg":"White","bg":"Blue"}
//
// Wire coordinates are signed and unchecked. `decode_batch` converts them
// into `PaintEvent`s validated against the grid, so everything past the
// decoder deals only in well-formed events.

use serde::Deserialize;

use crate::buffer::GridSize;
use crate::cell::Cell;
use crate::color::ColorName;
use crate::error::ScreenError;

// ─── PaintEvent ──────────────────────────────────────────────────────────────

/// One instruction from the engine to set grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintEvent {
    /// Paint a single cell.
    SetChar {
        row: u16,
        col: u16,
        ch: char,
        fg: ColorName,
        bg: ColorName,
    },
    /// Paint `width` cells left to right; `text` shorter than `width` is
    /// padded with spaces.
    SetRun {
        row: u16,
        col: u16,
        width: u16,
        text: String,
        fg: ColorName,
        bg: ColorName,
    },
}

impl PaintEvent {
    /// Row this event paints.
    #[inline]
    #[must_use]
    pub const fn row(&self) -> u16 {
        match self {
            Self::SetChar { row, .. } | Self::SetRun { row, .. } => *row,
        }
    }

    /// Number of cells this event paints.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        match self {
            Self::SetChar { .. } => 1,
            Self::SetRun { width, .. } => *width,
        }
    }

    /// Check the event against a grid.
    ///
    /// # Errors
    ///
    /// - [`ScreenError::OutOfBounds`] if any painted cell falls outside `size`.
    /// - [`ScreenError::Malformed`] if a run's text is longer than its width.
    pub fn validate(&self, size: GridSize) -> Result<(), ScreenError> {
        let (row, col) = match self {
            Self::SetChar { row, col, .. } => (*row, *col),
            Self::SetRun {
                row,
                col,
                width,
                text,
                ..
            } => {
                let chars = text.chars().count();
                if chars > usize::from(*width) {
                    return Err(ScreenError::Malformed(format!(
                        "run at ({row}, {col}) has {chars} characters but width {width}"
                    )));
                }
                (*row, *col)
            }
        };

        if !size.contains(row, col) {
            return Err(size.out_of_bounds(i64::from(row), i64::from(col)));
        }
        // Rightmost painted column must also be on the grid.
        let last = u32::from(col) + u32::from(self.width().max(1)) - 1;
        if last >= u32::from(size.cols) {
            return Err(size.out_of_bounds(i64::from(row), i64::from(last)));
        }
        Ok(())
    }

    /// The `(col, cell)` pairs this event paints, left to right.
    ///
    /// Stops at the last addressable column; a run reaching past
    /// `u16::MAX` is cut short rather than wrapping.
    pub fn cells(&self) -> impl Iterator<Item = (u16, Cell)> + '_ {
        let (col, width, chars, fg, bg) = match self {
            Self::SetChar { col, ch, fg, bg, .. } => (*col, 1, Chars::One(Some(*ch)), *fg, *bg),
            Self::SetRun {
                col,
                width,
                text,
                fg,
                bg,
                ..
            } => (*col, *width, Chars::Text(text.chars()), *fg, *bg),
        };
        let mut chars = chars;
        (0..width).map_while(move |i| {
            let col = col.checked_add(i)?;
            let ch = chars.next().unwrap_or(' ');
            Some((col, Cell::new(ch, fg, bg)))
        })
    }
}

/// Character source for [`PaintEvent::cells`].
enum Chars<'a> {
    One(Option<char>),
    Text(std::str::Chars<'a>),
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::One(ch) => ch.take(),
            Self::Text(chars) => chars.next(),
        }
    }
}

// ─── Wire format ─────────────────────────────────────────────────────────────

/// A paint event exactly as the engine serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "t")]
pub enum WireEvent {
    #[serde(rename = "c")]
    Char {
        x: i64,
        y: i64,
        c: String,
        fg: ColorName,
        bg: ColorName,
    },
    #[serde(rename = "m")]
    Run {
        x: i64,
        y: i64,
        width: i64,
        #[serde(default)]
        value: String,
        fg: ColorName,
        bg: ColorName,
    },
}

impl WireEvent {
    /// Convert to a [`PaintEvent`] checked against `size`.
    ///
    /// # Errors
    ///
    /// - [`ScreenError::OutOfBounds`] for coordinates outside the grid,
    ///   including negative ones.
    /// - [`ScreenError::Malformed`] for a negative width, a `c` field that
    ///   is not exactly one character, or text longer than the width.
    pub fn into_paint(self, size: GridSize) -> Result<PaintEvent, ScreenError> {
        let event = match self {
            Self::Char { x, y, c, fg, bg } => {
                let (row, col) = coords(size, y, x)?;
                let mut chars = c.chars();
                let ch = match (chars.next(), chars.next()) {
                    (Some(ch), None) => ch,
                    _ => {
                        return Err(ScreenError::Malformed(format!(
                            "cell at ({y}, {x}) carries {c:?}, expected one character"
                        )));
                    }
                };
                PaintEvent::SetChar { row, col, ch, fg, bg }
            }
            Self::Run {
                x,
                y,
                width,
                value,
                fg,
                bg,
            } => {
                if width < 0 {
                    return Err(ScreenError::Malformed(format!(
                        "run at ({y}, {x}) has negative width {width}"
                    )));
                }
                let (row, col) = coords(size, y, x)?;
                let width = u16::try_from(width)
                    .map_err(|_| size.out_of_bounds(y, x.saturating_add(width)))?;
                PaintEvent::SetRun {
                    row,
                    col,
                    width,
                    text: value,
                    fg,
                    bg,
                }
            }
        };
        event.validate(size)?;
        Ok(event)
    }
}

fn coords(size: GridSize, y: i64, x: i64) -> Result<(u16, u16), ScreenError> {
    match (u16::try_from(y), u16::try_from(x)) {
        (Ok(row), Ok(col)) if size.contains(row, col) => Ok((row, col)),
        _ => Err(size.out_of_bounds(y, x)),
    }
}

/// Decode a JSON array of engine paint events, validated against `size`.
///
/// # Errors
///
/// [`ScreenError::Decode`] for invalid JSON or unknown event tags/colors,
/// otherwise whatever [`WireEvent::into_paint`] reports for the first bad
/// event.
///
/// # Examples
///
/// ```
/// use n_screen::buffer::GridSize;
/// use n_screen::paint::{decode_batch, PaintEvent};
///
/// let events = decode_batch(
///     r#"[{"t":"c","x":1,"y":0,"c":"a","fg":"White","bg":"Blue"}]"#,
///     GridSize::default(),
/// )
/// .unwrap();
/// assert_eq!(events[0].row(), 0);
/// ```
pub fn decode_batch(json: &str, size: GridSize) -> Result<Vec<PaintEvent>, ScreenError> {
    let wire: Vec<WireEvent> = serde_json::from_str(json)?;
    wire.into_iter().map(|w| w.into_paint(size)).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SIZE: GridSize = GridSize::new(10, 4);

    fn run(col: u16, width: u16, text: &str) -> PaintEvent {
        PaintEvent::SetRun {
            row: 0,
            col,
            width,
            text: text.to_owned(),
            fg: ColorName::White,
            bg: ColorName::Blue,
        }
    }

    fn run_default(width: u16) -> PaintEvent {
        PaintEvent::SetRun {
            row: 0,
            col: 0,
            width,
            text: String::new(),
            fg: ColorName::Default,
            bg: ColorName::Default,
        }
    }

    // ── Expansion ───────────────────────────────────────────────────────

    #[test]
    fn set_char_paints_one_cell() {
        let event = PaintEvent::SetChar {
            row: 2,
            col: 7,
            ch: 'q',
            fg: ColorName::Red,
            bg: ColorName::Default,
        };
        let cells: Vec<_> = event.cells().collect();
        assert_eq!(cells, [(7, Cell::new('q', ColorName::Red, ColorName::Default))]);
    }

    #[test]
    fn run_pads_short_text_with_spaces() {
        let text: String = run(0, 5, "hi").cells().map(|(_, c)| c.ch).collect();
        assert_eq!(text, "hi   ");
    }

    #[test]
    fn run_columns_advance_from_start() {
        let cols: Vec<u16> = run(3, 4, "abcd").cells().map(|(col, _)| col).collect();
        assert_eq!(cols, [3, 4, 5, 6]);
    }

    #[test]
    fn zero_width_run_paints_nothing() {
        assert_eq!(run(0, 0, "").cells().count(), 0);
    }

    #[test]
    fn run_at_last_column_stops_without_overflow() {
        let cells: Vec<_> = run(u16::MAX, 3, "xyz").cells().collect();
        assert_eq!(
            cells,
            [(u16::MAX, Cell::new('x', ColorName::White, ColorName::Blue))]
        );
    }

    // ── Validation ──────────────────────────────────────────────────────

    #[test]
    fn run_ending_on_last_column_is_valid() {
        assert!(run(6, 4, "").validate(SIZE).is_ok());
    }

    #[test]
    fn run_spilling_past_right_edge_is_out_of_bounds() {
        let err = run(6, 5, "").validate(SIZE).unwrap_err();
        assert!(matches!(err, ScreenError::OutOfBounds { row: 0, col: 10, .. }));
    }

    #[test]
    fn run_text_longer_than_width_is_malformed() {
        let err = run(0, 2, "abc").validate(SIZE).unwrap_err();
        assert!(matches!(err, ScreenError::Malformed(_)));
    }

    #[test]
    fn row_past_bottom_is_out_of_bounds() {
        let event = PaintEvent::SetChar {
            row: 4,
            col: 0,
            ch: 'x',
            fg: ColorName::Default,
            bg: ColorName::Default,
        };
        assert!(matches!(
            event.validate(SIZE),
            Err(ScreenError::OutOfBounds { row: 4, col: 0, .. })
        ));
    }

    // ── Wire decoding ───────────────────────────────────────────────────

    #[test]
    fn decode_both_tags() {
        let json = r#"[
            {"t":"c","x":1,"y":2,"c":"a","fg":"White","bg":"Blue"},
            {"t":"m","x":0,"y":3,"width":5,"value":"hi","fg":"Grey","bg":"Black"}
        ]"#;
        let events = decode_batch(json, SIZE).unwrap();
        assert_eq!(
            events,
            [
                PaintEvent::SetChar {
                    row: 2,
                    col: 1,
                    ch: 'a',
                    fg: ColorName::White,
                    bg: ColorName::Blue,
                },
                PaintEvent::SetRun {
                    row: 3,
                    col: 0,
                    width: 5,
                    text: "hi".to_owned(),
                    fg: ColorName::Grey,
                    bg: ColorName::Black,
                },
            ]
        );
    }

    #[test]
    fn decode_run_without_value_is_blank() {
        let json = r#"[{"t":"m","x":0,"y":0,"width":3,"fg":"Default","bg":"Default"}]"#;
        let events = decode_batch(json, SIZE).unwrap();
        assert_eq!(events[0], run_default(3));
    }

    #[test]
    fn decode_negative_width_is_malformed() {
        let json = r#"[{"t":"m","x":0,"y":0,"width":-1,"value":"","fg":"Default","bg":"Default"}]"#;
        assert!(matches!(
            decode_batch(json, SIZE),
            Err(ScreenError::Malformed(_))
        ));
    }

    #[test]
    fn decode_negative_coordinate_is_out_of_bounds() {
        let json = r#"[{"t":"c","x":-1,"y":0,"c":"a","fg":"Default","bg":"Default"}]"#;
        assert!(matches!(
            decode_batch(json, SIZE),
            Err(ScreenError::OutOfBounds { row: 0, col: -1, .. })
        ));
    }

    #[test]
    fn decode_multi_char_cell_is_malformed() {
        let json = r#"[{"t":"c","x":0,"y":0,"c":"ab","fg":"Default","bg":"Default"}]"#;
        assert!(matches!(
            decode_batch(json, SIZE),
            Err(ScreenError::Malformed(_))
        ));
        let json = r#"[{"t":"c","x":0,"y":0,"c":"","fg":"Default","bg":"Default"}]"#;
        assert!(matches!(
            decode_batch(json, SIZE),
            Err(ScreenError::Malformed(_))
        ));
    }

    #[test]
    fn decode_unknown_tag_or_color_fails() {
        let json = r#"[{"t":"z","x":0,"y":0}]"#;
        assert!(matches!(decode_batch(json, SIZE), Err(ScreenError::Decode(_))));
        let json = r#"[{"t":"c","x":0,"y":0,"c":"a","fg":"Plaid","bg":"Default"}]"#;
        assert!(matches!(decode_batch(json, SIZE), Err(ScreenError::Decode(_))));
    }

    #[test]
    fn decode_empty_batch() {
        assert!(decode_batch("[]", SIZE).unwrap().is_empty());
    }
}
