// SPDX-License-Identifier: MIT
//
// ScreenBuffer — the character grid the engine paints into.
//
// The engine's output is sparse: a keystroke usually repaints a handful of
// cells on one or two rows. The buffer keeps, per row, only the cells from
// column 0 up to the rightmost column ever written. Anything beyond that is
// logically unset and reads as `Cell::UNSET`.
//
// Design:
//
//   - `Vec<Vec<Cell>>`, one inner vector per row. Rows grow to the right on
//     demand; a write past the current end pads the gap with `Cell::BLANK`.
//     Rows never shrink for the lifetime of a session.
//
//   - Bounds are enforced on every write. A write outside the configured
//     grid is an engine/protocol desync and is reported, not clamped.
//
//   - The buffer has no notion of "touched" rows. Change tracking belongs
//     to the renderer, which owns the buffer.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::ScreenError;

// ─── GridSize ────────────────────────────────────────────────────────────────

/// Grid dimensions in columns × rows.
///
/// ```
/// use n_screen::buffer::GridSize;
///
/// let size: GridSize = "100x30".parse().unwrap();
/// assert_eq!(size, GridSize::new(100, 30));
/// assert_eq!(GridSize::default(), GridSize::new(80, 24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Width in columns.
    pub cols: u16,
    /// Height in rows.
    pub rows: u16,
}

impl GridSize {
    /// Create a size.
    #[inline]
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Whether either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(self, row: u16, col: u16) -> bool {
        row < self.rows && col < self.cols
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn area(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    /// Build the error for an out-of-grid coordinate.
    #[must_use]
    pub fn out_of_bounds(self, row: i64, col: i64) -> ScreenError {
        ScreenError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

impl FromStr for GridSize {
    type Err = ScreenError;

    /// Parse `COLSxROWS`, e.g. `80x24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScreenError::InvalidSize(s.to_owned());
        let (cols, rows) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let cols = cols.trim().parse::<u16>().map_err(|_| invalid())?;
        let rows = rows.trim().parse::<u16>().map_err(|_| invalid())?;
        let size = Self::new(cols, rows);
        if size.is_empty() {
            return Err(invalid());
        }
        Ok(size)
    }
}

// ─── ScreenBuffer ────────────────────────────────────────────────────────────

/// A `rows × cols` grid of cells with lazily extended rows.
///
/// # Examples
///
/// ```
/// use n_screen::buffer::{GridSize, ScreenBuffer};
/// use n_screen::cell::Cell;
/// use n_screen::color::ColorName;
///
/// let mut buf = ScreenBuffer::new(GridSize::default());
/// buf.set(0, 3, Cell::new('x', ColorName::White, ColorName::Blue)).unwrap();
///
/// assert_eq!(buf.row_len(0), 4);
/// assert_eq!(buf.get(0, 0), Some(Cell::BLANK));
/// assert_eq!(buf.get(1, 0), Some(Cell::UNSET));
/// assert_eq!(buf.get(24, 0), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    size: GridSize,
    rows: Vec<Vec<Cell>>,
}

impl ScreenBuffer {
    /// Create an empty buffer; every cell reads as [`Cell::UNSET`].
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            rows: vec![Vec::new(); usize::from(size.rows)],
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Configured grid size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// The cell at `(row, col)`.
    ///
    /// Returns `None` outside the grid and [`Cell::UNSET`] for positions
    /// nothing has painted.
    #[must_use]
    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        if !self.size.contains(row, col) {
            return None;
        }
        let cells = &self.rows[usize::from(row)];
        Some(cells.get(usize::from(col)).copied().unwrap_or(Cell::UNSET))
    }

    /// The painted portion of a row (column 0 through the rightmost write).
    ///
    /// Empty for a row nothing has painted. `None` if `row` is outside the grid.
    #[must_use]
    pub fn row(&self, row: u16) -> Option<&[Cell]> {
        self.rows.get(usize::from(row)).map(Vec::as_slice)
    }

    /// Number of painted columns in `row` (0 outside the grid).
    #[must_use]
    pub fn row_len(&self, row: u16) -> usize {
        self.row(row).map_or(0, <[Cell]>::len)
    }

    /// The painted text of a row, without styling.
    #[must_use]
    pub fn row_text(&self, row: u16) -> Option<String> {
        self.row(row).map(|cells| cells.iter().map(|c| c.ch).collect())
    }

    // ─── Mutation ────────────────────────────────────────────────────────

    /// Write one cell, padding the row with [`Cell::BLANK`] up to `col`.
    ///
    /// # Errors
    ///
    /// [`ScreenError::OutOfBounds`] if `(row, col)` is outside the grid. The
    /// buffer is unchanged in that case.
    pub fn set(&mut self, row: u16, col: u16, cell: Cell) -> Result<(), ScreenError> {
        if !self.size.contains(row, col) {
            return Err(self.size.out_of_bounds(i64::from(row), i64::from(col)));
        }
        let cells = &mut self.rows[usize::from(row)];
        let col = usize::from(col);
        if col >= cells.len() {
            cells.resize(col + 1, Cell::BLANK);
        }
        cells[col] = cell;
        Ok(())
    }
}

impl fmt::Debug for ScreenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let painted = self.rows.iter().filter(|r| !r.is_empty()).count();
        f.debug_struct("ScreenBuffer")
            .field("size", &self.size)
            .field("painted_rows", &painted)
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
