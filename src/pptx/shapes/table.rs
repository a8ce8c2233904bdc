//! Table model: a 2D grid of cells with merge support.
use crate::common::color::RGBColor;
use crate::common::error::{Error, Result};
use crate::pptx::shapes::textframe::TextFrame;

/// A cell in a table.
///
/// Merged regions are represented the way DrawingML stores them: the
/// origin cell of a merge carries the span counts, and the covered cells
/// remain in the grid flagged as horizontal or vertical continuations.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text_frame: TextFrame,
    /// Solid background fill, if set
    pub fill: Option<RGBColor>,
    /// Number of grid columns this cell spans (1 = no horizontal merge)
    pub grid_span: usize,
    /// Number of rows this cell spans (1 = no vertical merge)
    pub row_span: usize,
    /// Continuation of a horizontal merge started to the left
    pub h_merge: bool,
    /// Continuation of a vertical merge started above
    pub v_merge: bool,
}

impl Cell {
    fn new() -> Self {
        Self {
            text_frame: TextFrame::new(),
            fill: None,
            grid_span: 1,
            row_span: 1,
            h_merge: false,
            v_merge: false,
        }
    }

    /// Whether this cell is covered by a merge originating elsewhere.
    pub fn is_spanned(&self) -> bool {
        self.h_merge || self.v_merge
    }

    /// Whether this cell is the origin of a merged region.
    pub fn is_merge_origin(&self) -> bool {
        self.grid_span > 1 || self.row_span > 1
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

/// A table owned by a graphic-frame shape.
#[derive(Debug, Clone)]
pub struct Table {
    /// Column widths in EMUs
    pub col_widths: Vec<i64>,
    /// Row heights in EMUs
    pub row_heights: Vec<i64>,
    /// Cells in row-major order; every row has `col_widths.len()` cells
    cells: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table with the given grid, distributing the overall width
    /// and height evenly across columns and rows. An empty grid fails with
    /// [`Error::TableSize`].
    pub fn new(rows: usize, cols: usize, width: i64, height: i64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::TableSize { rows, cols });
        }
        let col_widths = vec![width / cols as i64; cols];
        let row_heights = vec![height / rows as i64; rows];
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| Cell::new()).collect())
            .collect();

        Ok(Self {
            col_widths,
            row_heights,
            cells,
        })
    }

    /// Build a table from parsed parts. Used by the slide reader.
    pub(crate) fn from_parts(
        col_widths: Vec<i64>,
        row_heights: Vec<i64>,
        cells: Vec<Vec<Cell>>,
    ) -> Self {
        Self {
            col_widths,
            row_heights,
            cells,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    /// Access a cell by (row, column).
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.check_coord(row, col)?;
        Ok(&self.cells[row][col])
    }

    /// Mutable access to a cell by (row, column).
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        self.check_coord(row, col)?;
        Ok(&mut self.cells[row][col])
    }

    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|r| r.as_slice())
    }

    fn check_coord(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.row_count() || col >= self.col_count() {
            return Err(Error::CellIndex {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            });
        }
        Ok(())
    }

    /// Merge the rectangular region spanned by two cell coordinates.
    ///
    /// The top-left cell of the rectangle becomes the merge origin and
    /// keeps its content; the covered cells become continuation cells.
    /// One-way operation: there is no unmerge.
    pub fn merge(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<()> {
        self.check_coord(a.0, a.1)?;
        self.check_coord(b.0, b.1)?;

        let (top, bottom) = (a.0.min(b.0), a.0.max(b.0));
        let (left, right) = (a.1.min(b.1), a.1.max(b.1));
        let row_span = bottom - top + 1;
        let grid_span = right - left + 1;

        for row in top..=bottom {
            for col in left..=right {
                let cell = &mut self.cells[row][col];
                if row == top && col == left {
                    cell.grid_span = grid_span;
                    cell.row_span = row_span;
                    cell.h_merge = false;
                    cell.v_merge = false;
                } else if row == top {
                    cell.h_merge = true;
                } else if col == left {
                    // Leading cell of a continuation row carries the
                    // horizontal span so the grid stays rectangular.
                    cell.v_merge = true;
                    cell.grid_span = grid_span;
                } else {
                    cell.h_merge = true;
                    cell.v_merge = true;
                }
            }
        }

        Ok(())
    }
}
