//! Board geometry.
//!
//! The board is an ordered list of cards laid out row-major. The column
//! count is inferred from the board length (`ceil(sqrt(len))`), so a
//! 12-card board is 4 wide and a 9-card board is 3 wide. A final partial
//! row leaves empty slots; positions past the end of the board are never
//! neighbors of anything.

use smallvec::SmallVec;

/// Row-major layout for a board of a given length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    len: usize,
    columns: usize,
}

impl Grid {
    /// Infer the layout for a board with `len` cards.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        let mut columns = 1;
        while columns * columns < len {
            columns += 1;
        }
        Self { len, columns }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Occupied 4-neighbors of a position.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> SmallVec<[usize; 4]> {
        let mut out = SmallVec::new();
        if index >= self.len {
            return out;
        }
        let row = index / self.columns;
        let col = index % self.columns;

        if row > 0 {
            out.push(index - self.columns);
        }
        if col > 0 {
            out.push(index - 1);
        }
        if col + 1 < self.columns && index + 1 < self.len {
            out.push(index + 1);
        }
        if index + self.columns < self.len {
            out.push(index + self.columns);
        }
        out
    }

    /// Every occupied position in the same row.
    #[must_use]
    pub fn row_of(&self, index: usize) -> Vec<usize> {
        let start = (index / self.columns) * self.columns;
        (start..(start + self.columns).min(self.len)).collect()
    }

    /// Every occupied position in the same column.
    #[must_use]
    pub fn column_of(&self, index: usize) -> Vec<usize> {
        let col = index % self.columns;
        (col..self.len).step_by(self.columns).collect()
    }
}
