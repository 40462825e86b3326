#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub enum Op {
    /// Represents a gap in the first sequence (v). Horizontal (left) move in the score matrix.
    GapFirst,
    /// Represents a gap in the second sequence (^). Vertical (up) move in the score matrix.
    GapSecond,
    /// Represents a match between the sequences (=)
    Match,
    /// Represents a mismatch between the sequences (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}
