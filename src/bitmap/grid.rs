use std::fmt;

use thiserror::Error;

use super::Color;

/// Failures raised by [`Grid`] construction and fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("column size and row size must be greater than 0 (got {width}x{height})")]
    InvalidSize { width: i64, height: i64 },
    #[error("column must be within 1 and {width}; row must be within 1 and {height}")]
    OutOfRange { width: usize, height: usize },
}

/// A fixed-size, row-major matrix of colors.
///
/// All coordinates in the public API are 1-based, matching the command
/// protocol and are translated to 0-based storage indices in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Create a `width` x `height` grid with every cell set to [`Color::WHITE`].
    ///
    /// # Errors
    /// Returns [`GridError::InvalidSize`] if either dimension is below 1.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidSize { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Color::WHITE; width * height],
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn contains_column(&self, col: i64) -> bool {
        (1..=self.width as i64).contains(&col)
    }

    pub fn contains_row(&self, row: i64) -> bool {
        (1..=self.height as i64).contains(&row)
    }

    /// Both column endpoints are in bounds, in either order.
    pub fn contains_columns(&self, col1: i64, col2: i64) -> bool {
        self.contains_column(col1) && self.contains_column(col2)
    }

    /// Both row endpoints are in bounds, in either order.
    pub fn contains_rows(&self, row1: i64, row2: i64) -> bool {
        self.contains_row(row1) && self.contains_row(row2)
    }

    /// Read one cell.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfRange`] if the coordinate lies outside the grid.
    pub fn get(&self, col: i64, row: i64) -> Result<Color, GridError> {
        self.check(col, col, row, row)?;
        Ok(self.cells[self.index(col, row)])
    }

    /// Paint the rectangle spanned by the two column and two row endpoints.
    ///
    /// Endpoints may be given in either order. Points, vertical and
    /// horizontal lines and full clears are all degenerate rectangles of
    /// this one fill.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfRange`] if any endpoint is outside the grid,
    /// in which case no cell is touched.
    pub fn set_region(
        &mut self,
        col1: i64,
        col2: i64,
        row1: i64,
        row2: i64,
        color: Color,
    ) -> Result<(), GridError> {
        self.check(col1, col2, row1, row2)?;

        let (col_lo, col_hi) = (col1.min(col2), col1.max(col2));
        let (row_lo, row_hi) = (row1.min(row2), row1.max(row2));
        tracing::trace!(col_lo, col_hi, row_lo, row_hi, %color, "fill region");

        for row in row_lo..=row_hi {
            let start = self.index(col_lo, row);
            let end = self.index(col_hi, row);
            self.cells[start..=end].fill(color);
        }
        Ok(())
    }

    /// True when every cell holds [`Color::WHITE`].
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Color::WHITE)
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.width)
    }

    /// Owned snapshot of [`Grid::rows`].
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.rows().map(<[Color]>::to_vec).collect()
    }

    /// Each row as a contiguous string of color letters.
    pub fn render_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.as_char()).collect())
            .collect()
    }

    fn check(&self, col1: i64, col2: i64, row1: i64, row2: i64) -> Result<(), GridError> {
        if self.contains_columns(col1, col2) && self.contains_rows(row1, row2) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                width: self.width,
                height: self.height,
            })
        }
    }

    // Callers must have passed the coordinate through `check` first.
    const fn index(&self, col: i64, row: i64) -> usize {
        (row as usize - 1) * self.width + (col as usize - 1)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render_lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
