use std::fmt::{Display, Formatter};

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use eyre::{eyre, Result};

use crate::pairwise::scoring;

use super::step::Step;
use super::utils;
use super::Op;

/// Global alignment of two sequences.
///
/// Both rows have the same length, `None` marks a gap. Every column holds at least one symbol.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct Alignment<Score, Symbol> {
    /// Optimal alignment score, i.e. the bottom-right cell of the score matrix.
    score: Score,
    /// First sequence with gaps inserted.
    aligned1: Vec<Option<Symbol>>,
    /// Second sequence with gaps inserted.
    aligned2: Vec<Option<Symbol>>,
    /// Run-length encoded alignment columns.
    steps: Vec<Step<u8>>,
}

impl<Score, Symbol: PartialEq> Alignment<Score, Symbol> {
    /// Builds an alignment from its gapped rows.
    pub fn new(
        score: Score,
        aligned1: Vec<Option<Symbol>>,
        aligned2: Vec<Option<Symbol>>,
    ) -> Result<Self> {
        if aligned1.len() != aligned2.len() {
            return Err(eyre!(
                "Aligned rows must have the same length, got {} and {}",
                aligned1.len(),
                aligned2.len()
            ));
        }

        let ops: Vec<Op> = aligned1
            .iter()
            .zip(aligned2.iter())
            .enumerate()
            .map(|(column, pair)| match pair {
                (Some(a), Some(b)) if a == b => Ok(Op::Match),
                (Some(_), Some(_)) => Ok(Op::Mismatch),
                (None, Some(_)) => Ok(Op::GapFirst),
                (Some(_), None) => Ok(Op::GapSecond),
                (None, None) => Err(eyre!("Column {column} aligns a gap against a gap")),
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            score,
            aligned1,
            aligned2,
            steps: Step::encode(ops),
        })
    }
}

impl<Score, Symbol> Alignment<Score, Symbol> {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    /// Checks if the alignment is empty, i.e. both sequences were empty.
    pub fn is_empty(&self) -> bool {
        self.aligned1.is_empty()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Alignment operations, one per column.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        Step::decode(self.steps.iter())
    }
}

impl<Score, Symbol: Copy> Alignment<Score, Symbol> {
    /// The first sequence recovered from the alignment (gaps removed).
    pub fn ungapped1(&self) -> Vec<Symbol> {
        self.aligned1.iter().flatten().copied().collect()
    }

    /// The second sequence recovered from the alignment (gaps removed).
    pub fn ungapped2(&self) -> Vec<Symbol> {
        self.aligned2.iter().flatten().copied().collect()
    }
}

impl<S: scoring::Score, Symbol> Alignment<S, Symbol> {
    /// Scores the alignment column by column with the given scheme.
    /// For an optimal alignment built with the same scheme this equals [`Alignment::score`].
    pub fn rescore<Scheme>(&self, scheme: &Scheme) -> Result<S>
    where
        Scheme: scoring::Scheme<Score = S, Symbol = Symbol>,
    {
        utils::rescore(&self.aligned1, &self.aligned2, scheme)
    }
}

impl<Score, Symbol: Copy + Into<char>> Alignment<Score, Symbol> {
    /// Three text lines: the first row, the match line and the second row.
    pub fn render(&self) -> [String; 3] {
        utils::render(&self.aligned1, &self.aligned2)
    }
}

impl<Score, Symbol: Copy + Into<char>> Display for Alignment<Score, Symbol> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [first, middle, second] = self.render();
        write!(f, "{first}\n{middle}\n{second}")
    }
}
