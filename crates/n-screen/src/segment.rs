// SPDX-License-Identifier: MIT
//
// Segment renderer — turns paint batches into minimal redraw runs.
//
// The engine answers each keystroke with a batch of paint events. Redrawing
// the whole grid for every batch would waste most of the work: a typical
// keystroke changes one or two rows. The renderer therefore:
//
//   1. Validates the whole batch against the grid. One bad event rejects the
//      batch and leaves the buffer exactly as it was.
//   2. Applies events strictly in order (later writes win) and records the
//      rows they touched.
//   3. Re-segments only the touched rows. A segment is a maximal run of
//      adjacent cells sharing `(fg, bg)`; the presentation layer draws one
//      styled run per segment.
//
// Cost is O(cells painted + width of touched rows). A full-screen repaint
// still touches every row, so the worst case is O(cols × rows).

use std::collections::BTreeSet;

use tracing::{trace, warn};

use crate::buffer::{GridSize, ScreenBuffer};
use crate::cell::Cell;
use crate::color::ColorName;
use crate::error::ScreenError;
use crate::paint::PaintEvent;

/// Rows touched by a batch, in ascending order.
pub type TouchedRows = BTreeSet<u16>;

// ─── Segment ─────────────────────────────────────────────────────────────────

/// A maximal horizontal run of same-styled cells within one row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Row the run lives on.
    pub row: u16,
    /// First column of the run.
    pub start_col: u16,
    /// Characters covered by the run.
    pub text: String,
    /// Foreground color of every cell in the run.
    pub fg: ColorName,
    /// Background color of every cell in the run.
    pub bg: ColorName,
}

impl Segment {
    /// Number of columns the run covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the run covers no columns. Rendered segments are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The full set of segments for one redrawn row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowUpdate {
    /// Row index.
    pub row: u16,
    /// Segments left to right, covering the row's painted width.
    pub segments: Vec<Segment>,
}

impl RowUpdate {
    /// The row's text, segments concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

// ─── SegmentRenderer ─────────────────────────────────────────────────────────

/// Applies paint batches to a [`ScreenBuffer`] and segments touched rows.
///
/// # Usage
///
/// ```
/// use n_screen::buffer::GridSize;
/// use n_screen::color::ColorName;
/// use n_screen::paint::PaintEvent;
/// use n_screen::segment::SegmentRenderer;
///
/// let mut renderer = SegmentRenderer::new(GridSize::default());
/// let touched = renderer
///     .apply(&[PaintEvent::SetRun {
///         row: 0,
///         col: 0,
///         width: 5,
///         text: "hi".into(),
///         fg: ColorName::White,
///         bg: ColorName::Blue,
///     }])
///     .unwrap();
///
/// assert_eq!(touched.into_iter().collect::<Vec<_>>(), [0]);
/// let segments = renderer.render_row(0).unwrap();
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].text, "hi   ");
/// ```
#[derive(Debug, Clone)]
pub struct SegmentRenderer {
    buffer: ScreenBuffer,
}

impl SegmentRenderer {
    /// Create a renderer over an empty buffer of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            buffer: ScreenBuffer::new(size),
        }
    }

    /// The underlying buffer (read-only; only paint batches mutate it).
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &ScreenBuffer {
        &self.buffer
    }

    /// Grid size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.buffer.size()
    }

    /// Apply a batch of paint events in order.
    ///
    /// Returns exactly the rows the batch painted. A zero-width run paints
    /// nothing and touches no row.
    ///
    /// # Errors
    ///
    /// The first event that fails [`PaintEvent::validate`]. Nothing in the
    /// batch is applied when any event is rejected.
    pub fn apply(&mut self, events: &[PaintEvent]) -> Result<TouchedRows, ScreenError> {
        let size = self.size();
        if let Err(err) = events.iter().try_for_each(|e| e.validate(size)) {
            warn!(error = %err, events = events.len(), "rejected paint batch");
            return Err(err);
        }

        let mut touched = TouchedRows::new();
        for event in events {
            let row = event.row();
            for (col, cell) in event.cells() {
                self.buffer.set(row, col, cell)?;
                touched.insert(row);
            }
        }

        trace!(
            events = events.len(),
            rows = touched.len(),
            "applied paint batch"
        );
        Ok(touched)
    }

    /// Segment one row.
    ///
    /// A row nothing has painted yields a single `~` segment in the default
    /// style, the placeholder for an empty line.
    ///
    /// # Errors
    ///
    /// [`ScreenError::OutOfBounds`] if `row` is outside the grid.
    pub fn render_row(&self, row: u16) -> Result<Vec<Segment>, ScreenError> {
        let cells = self
            .buffer
            .row(row)
            .ok_or_else(|| self.size().out_of_bounds(i64::from(row), 0))?;

        if cells.is_empty() {
            return Ok(vec![placeholder(row)]);
        }

        let mut segments: Vec<Segment> = Vec::new();
        let mut start = 0;
        for (col, cell) in cells.iter().enumerate() {
            if col > start && !cell.same_style(cells[col - 1]) {
                segments.push(segment(row, start, &cells[start..col]));
                start = col;
            }
        }
        segments.push(segment(row, start, &cells[start..]));
        Ok(segments)
    }

    /// Apply a batch and segment every row it touched.
    ///
    /// # Errors
    ///
    /// Whatever [`apply`](Self::apply) rejects; the buffer is untouched then.
    pub fn render(&mut self, events: &[PaintEvent]) -> Result<Vec<RowUpdate>, ScreenError> {
        let touched = self.apply(events)?;
        touched
            .into_iter()
            .map(|row| {
                Ok(RowUpdate {
                    row,
                    segments: self.render_row(row)?,
                })
            })
            .collect()
    }

    /// Segment every row of the grid, painted or not.
    ///
    /// Used to lay out the initial screen before the engine's first paint.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RowUpdate> {
        (0..self.size().rows)
            .filter_map(|row| {
                self.render_row(row)
                    .ok()
                    .map(|segments| RowUpdate { row, segments })
            })
            .collect()
    }
}

fn placeholder(row: u16) -> Segment {
    Segment {
        row,
        start_col: 0,
        text: Cell::UNSET.ch.to_string(),
        fg: Cell::UNSET.fg,
        bg: Cell::UNSET.bg,
    }
}

/// Build a segment from a non-empty, uniformly styled slice of cells.
#[allow(clippy::cast_possible_truncation)]
fn segment(row: u16, start: usize, cells: &[Cell]) -> Segment {
    let style = cells[0];
    Segment {
        row,
        // Safe truncation: row slices never exceed the u16 grid width.
        start_col: start as u16,
        text: cells.iter().map(|c| c.ch).collect(),
        fg: style.fg,
        bg: style.bg,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
