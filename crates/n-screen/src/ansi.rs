// SPDX-License-Identifier: MIT
//
// ANSI presentation adapter.
//
// Segments are the core's output; how they become pixels is up to the
// host. This module is one such host: it writes row updates to any
// `impl Write` as cursor-positioned, SGR-colored runs for a terminal.
//
// Per row: move to column 0, erase the line, then one run per segment.
// SGR codes are only emitted when the style actually changes within a row.
// EL fills with the current background, so attributes are reset before
// each erase, and the frame ends with a reset so nothing leaks into the
// shell.
//
// The symbolic palette maps onto the 16 standard ANSI colors:
// 30-37/40-47 for the normal eight, 90-97/100-107 for the bright eight.

use std::io::{self, Write};

use crate::color::ColorName;
use crate::segment::RowUpdate;

/// Move the cursor to `(row, col)`, 0-indexed (CUP is 1-indexed).
#[inline]
pub fn cursor_to(w: &mut impl Write, row: u16, col: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", u32::from(row) + 1, u32::from(col) + 1)
}

/// Erase the entire current line (EL 2).
#[inline]
pub fn erase_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground color.
pub fn fg(w: &mut impl Write, color: ColorName) -> io::Result<()> {
    match color.ansi_index() {
        None => w.write_all(b"\x1b[39m"),
        Some(idx @ 0..=7) => write!(w, "\x1b[{}m", 30 + u16::from(idx)),
        Some(idx) => write!(w, "\x1b[{}m", 82 + u16::from(idx)),
    }
}

/// Set the background color.
pub fn bg(w: &mut impl Write, color: ColorName) -> io::Result<()> {
    match color.ansi_index() {
        None => w.write_all(b"\x1b[49m"),
        Some(idx @ 0..=7) => write!(w, "\x1b[{}m", 40 + u16::from(idx)),
        Some(idx) => write!(w, "\x1b[{}m", 92 + u16::from(idx)),
    }
}

/// Write row updates as positioned, colored runs.
///
/// # Errors
///
/// Propagates any error from the writer.
///
/// # Examples
///
/// ```
/// use n_screen::ansi::write_updates;
/// use n_screen::buffer::GridSize;
/// use n_screen::segment::SegmentRenderer;
///
/// let renderer = SegmentRenderer::new(GridSize::new(10, 2));
/// let mut out = Vec::new();
/// write_updates(&mut out, &renderer.snapshot()).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains('~'));
/// ```
pub fn write_updates(w: &mut impl Write, updates: &[RowUpdate]) -> io::Result<()> {
    let mut style: Option<(ColorName, ColorName)> = None;
    for update in updates {
        if style.take().is_some() {
            reset(w)?;
        }
        cursor_to(w, update.row, 0)?;
        erase_line(w)?;
        for segment in &update.segments {
            if style.is_none_or(|(f, _)| f != segment.fg) {
                fg(w, segment.fg)?;
            }
            if style.is_none_or(|(_, b)| b != segment.bg) {
                bg(w, segment.bg)?;
            }
            style = Some((segment.fg, segment.bg));
            w.write_all(segment.text.as_bytes())?;
        }
    }
    if style.is_some() {
        reset(w)?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
