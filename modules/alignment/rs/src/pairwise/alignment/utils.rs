use eyre::{eyre, Result};
use itertools::{EitherOrBoth, Itertools};

use crate::pairwise::scoring::{self, gaps, symbols};

/// Text representation of a gap.
pub const GAP: char = '-';

/// Sums the score of every column of a gapped alignment.
/// Positions passed to the scorers are tracked in the ungapped sequence coordinates.
/// Fails if the running total leaves the range of the score type.
pub fn rescore<S, Scheme, Symbol>(
    aligned1: &[Option<Symbol>],
    aligned2: &[Option<Symbol>],
    scheme: &Scheme,
) -> Result<S>
where
    S: scoring::Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Symbol>,
{
    let (mut pos1, mut pos2) = (0, 0);
    let mut total = S::zero();

    for (column, pair) in aligned1.iter().zip_eq(aligned2.iter()).enumerate() {
        let delta = match pair {
            (Some(s1), Some(s2)) => {
                let delta = symbols::Scorer::score(scheme, pos1, s1, pos2, s2);
                pos1 += 1;
                pos2 += 1;
                delta
            }
            (Some(_), None) => {
                let delta = gaps::Scorer::seq2_gap(scheme, pos1);
                pos1 += 1;
                delta
            }
            (None, Some(_)) => {
                let delta = gaps::Scorer::seq1_gap(scheme, pos2);
                pos2 += 1;
                delta
            }
            (None, None) => continue,
        };
        total = total
            .checked_add(&delta)
            .ok_or_else(|| eyre!("Score overflow at alignment column {column}"))?;
    }
    Ok(total)
}

/// Renders a gapped alignment as three lines:
/// the first row, the match line (`|` match, `*` mismatch, ` ` gap) and the second row.
pub fn render<Symbol: Copy + Into<char>>(
    aligned1: &[Option<Symbol>],
    aligned2: &[Option<Symbol>],
) -> [String; 3] {
    let total = aligned1.len().max(aligned2.len());
    let mut lines = [
        String::with_capacity(total),
        String::with_capacity(total),
        String::with_capacity(total),
    ];

    for column in aligned1.iter().zip_longest(aligned2.iter()) {
        let (s1, s2) = match column {
            EitherOrBoth::Both(s1, s2) => (*s1, *s2),
            EitherOrBoth::Left(s1) => (*s1, None),
            EitherOrBoth::Right(s2) => (None, *s2),
        };
        let (c1, c2) = (s1.map_or(GAP, Into::into), s2.map_or(GAP, Into::into));

        let marker = match (s1, s2) {
            (Some(_), Some(_)) if c1 == c2 => '|',
            (Some(_), Some(_)) => '*',
            _ => ' ',
        };

        lines[0].push(c1);
        lines[1].push(marker);
        lines[2].push(c2);
    }
    lines
}
