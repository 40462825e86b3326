use std::collections::VecDeque;

use eyre::{bail, ensure, Result};

use crate::pairwise::alignment::Alignment;
use crate::pairwise::{scoring, Op};
use crate::{Alignable, Score};

use super::matrix::ScoreMatrix;
use super::tracer::Tracer;

/// Walks a completed score matrix from the bottom-right cell back to the origin and returns one
/// optimal global alignment.
///
/// When several moves explain a cell, the first one in the order diagonal, up, left is taken.
/// The diagonal move covers matches and substitutions alike.
/// Fails only for a matrix that a consistent fill of these sequences can't produce, see
/// [`reconstruct_traced`].
pub fn reconstruct<S, Smb, S1, S2, Scheme>(
    seq1: &S1,
    seq2: &S2,
    scoring: &Scheme,
    matrix: &ScoreMatrix<S>,
) -> Result<Alignment<S, Smb>>
where
    S: Score,
    Smb: Copy + PartialEq,
    S1: Alignable<Symbol = Smb> + ?Sized,
    S2: Alignable<Symbol = Smb> + ?Sized,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    reconstruct_traced(seq1, seq2, scoring, matrix, &mut ())
}

/// Same as [`reconstruct`], notifying the tracer after every backward step.
///
/// The matrix must come from [`super::build`] with the same sequences and scheme.
/// A matrix of a different shape, or one where no move explains a cell, is rejected.
/// A consistent fill always explains every cell, so the second error only reports a matrix
/// that was not built from these sequences and this scheme.
pub fn reconstruct_traced<S, Smb, S1, S2, Scheme, T>(
    seq1: &S1,
    seq2: &S2,
    scoring: &Scheme,
    matrix: &ScoreMatrix<S>,
    tracer: &mut T,
) -> Result<Alignment<S, Smb>>
where
    S: Score,
    Smb: Copy + PartialEq,
    S1: Alignable<Symbol = Smb> + ?Sized,
    S2: Alignable<Symbol = Smb> + ?Sized,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    T: Tracer<S, Smb> + ?Sized,
{
    let (n, m) = (seq1.len(), seq2.len());
    ensure!(
        matrix.shape() == (n + 1, m + 1),
        "Score matrix of shape {:?} can't be traced for sequences of length {} and {}",
        matrix.shape(),
        n,
        m
    );

    let mut aligned1 = VecDeque::with_capacity(n + m);
    let mut aligned2 = VecDeque::with_capacity(n + m);

    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        let current = matrix[(i, j)];
        let (row, col) = (i, j);

        // Sums that overflow can't explain the cell
        let explains = |prev: S, delta: S| prev.checked_add(&delta) == Some(current);

        let op = if i > 0
            && j > 0
            && explains(
                matrix[(i - 1, j - 1)],
                scoring.score(i - 1, seq1.at(i - 1), j - 1, seq2.at(j - 1)),
            )
        {
            let (s1, s2) = (*seq1.at(i - 1), *seq2.at(j - 1));
            aligned1.push_front(Some(s1));
            aligned2.push_front(Some(s2));
            i -= 1;
            j -= 1;
            if s1 == s2 { Op::Match } else { Op::Mismatch }
        } else if i > 0 && explains(matrix[(i - 1, j)], scoring.seq2_gap(i - 1)) {
            aligned1.push_front(Some(*seq1.at(i - 1)));
            aligned2.push_front(None);
            i -= 1;
            Op::GapSecond
        } else if j > 0 && explains(matrix[(i, j - 1)], scoring.seq1_gap(j - 1)) {
            aligned1.push_front(None);
            aligned2.push_front(Some(*seq2.at(j - 1)));
            j -= 1;
            Op::GapFirst
        } else {
            bail!(
                "Score matrix is inconsistent with the scoring scheme: no move explains cell ({}, {})",
                row,
                col
            );
        };

        tracer.step(
            row,
            col,
            op,
            aligned1.make_contiguous(),
            aligned2.make_contiguous(),
        );
    }

    let score = matrix.score();
    log::debug!(
        "Traced back {} alignment columns, score {:?}",
        aligned1.len(),
        score
    );
    Alignment::new(score, Vec::from(aligned1), Vec::from(aligned2))
}
