use eyre::{eyre, Result};

use crate::pairwise::scoring;
use crate::{Alignable, Score};

use super::matrix::ScoreMatrix;
use super::tracer::{Candidates, Tracer};

/// Builds the complete Needleman-Wunsch score matrix for two sequences.
///
/// Fails if any cell doesn't fit into the score type.
pub fn build<S, Smb, S1, S2, Scheme>(seq1: &S1, seq2: &S2, scoring: &Scheme) -> Result<ScoreMatrix<S>>
where
    S: Score,
    S1: Alignable<Symbol = Smb> + ?Sized,
    S2: Alignable<Symbol = Smb> + ?Sized,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    build_traced(seq1, seq2, scoring, &mut ())
}

/// Same as [`build`], notifying the tracer after every written cell.
///
/// Boundary cells are written first: the column `(i, 0)` top to bottom, then the row `(0, j)`
/// left to right. Inner cells follow in row-major order, so every cell depends only on
/// already finalized neighbours (up, left, up-left). Each cell is written exactly once.
pub fn build_traced<S, Smb, S1, S2, Scheme, T>(
    seq1: &S1,
    seq2: &S2,
    scoring: &Scheme,
    tracer: &mut T,
) -> Result<ScoreMatrix<S>>
where
    S: Score,
    S1: Alignable<Symbol = Smb> + ?Sized,
    S2: Alignable<Symbol = Smb> + ?Sized,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    T: Tracer<S, Smb> + ?Sized,
{
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    let mut matrix = ScoreMatrix::zeros(rows, cols);

    let add = |score: S, delta: S, row: usize, col: usize| -> Result<S> {
        score.checked_add(&delta).ok_or_else(|| {
            eyre!("Score overflow in cell ({row}, {col}), the score type is too narrow for the scheme")
        })
    };

    // Boundary: prefixes aligned against nothing but gaps
    tracer.init(0, 0, &matrix);
    for row in 1..rows {
        let score = add(matrix[(row - 1, 0)], scoring.seq2_gap(row - 1), row, 0)?;
        matrix.set(row, 0, score);
        tracer.init(row, 0, &matrix);
    }
    for col in 1..cols {
        let score = add(matrix[(0, col - 1)], scoring.seq1_gap(col - 1), 0, col)?;
        matrix.set(0, col, score);
        tracer.init(0, col, &matrix);
    }

    for row in 1..rows {
        let s1 = seq1.at(row - 1);
        let gap2 = scoring.seq2_gap(row - 1);
        for col in 1..cols {
            let diagonal = scoring.score(row - 1, s1, col - 1, seq2.at(col - 1));
            let candidates = Candidates::new(
                add(matrix[(row - 1, col - 1)], diagonal, row, col)?,
                add(matrix[(row - 1, col)], gap2, row, col)?,
                add(matrix[(row, col - 1)], scoring.seq1_gap(col - 1), row, col)?,
            );
            matrix.set(row, col, candidates.best);
            tracer.fill(row, col, &candidates, &matrix);
        }
    }

    log::debug!(
        "Built {}x{} score matrix, optimal global score {:?}",
        rows,
        cols,
        matrix.score()
    );
    Ok(matrix)
}
