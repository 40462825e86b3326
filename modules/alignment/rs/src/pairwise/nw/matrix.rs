use std::fmt::{Display, Formatter};
use std::ops::Index;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

use crate::Score;

/// Dense (n+1)×(m+1) dynamic programming matrix stored row by row.
///
/// Cell (i, j) holds the optimal score of the first `i` symbols of the first sequence aligned
/// against the first `j` symbols of the second one. Only the builder writes cells; everyone
/// else gets a read-only view.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct ScoreMatrix<S> {
    cells: Vec<S>,
    rows: usize,
    cols: usize,
}

impl<S: Score> ScoreMatrix<S> {
    pub(super) fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            cells: vec![S::zero(); rows * cols],
            rows,
            cols,
        }
    }

    #[inline(always)]
    pub(super) fn set(&mut self, row: usize, col: usize, score: S) {
        self.cells[row * self.cols + col] = score;
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.cells[row * self.cols + col]
    }

    /// Score of the complete alignment, i.e. the bottom-right cell.
    pub fn score(&self) -> S {
        self.cells[self.cells.len() - 1]
    }
}

impl<S> ScoreMatrix<S> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, row: usize) -> &[S] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[S]> {
        self.cells.chunks_exact(self.cols)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[S] {
        &self.cells
    }
}

impl<S> Index<(usize, usize)> for ScoreMatrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.cols + col]
    }
}

impl<S: Display> Display for ScoreMatrix<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|x| x.to_string().len())
            .max()
            .unwrap_or(1);

        for (ind, row) in self.iter_rows().enumerate() {
            if ind > 0 {
                writeln!(f)?;
            }
            for (col, score) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{score:>width$}")?;
            }
        }
        Ok(())
    }
}
