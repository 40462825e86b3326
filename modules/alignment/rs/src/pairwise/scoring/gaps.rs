use crate::pairwise::scoring::Score;

// Gap scoring function MUST be additive: a gapped column costs the same no matter what surrounds it.
// Gap-open/gap-extend (affine) schemes are not supported by the global aligner.
pub trait Scorer {
    type Score: Score;

    /// Cost of aligning `seq2[seq2pos]` against a gap in the first sequence.
    fn seq1_gap(&self, seq2pos: usize) -> Self::Score;
    /// Cost of aligning `seq1[seq1pos]` against a gap in the second sequence.
    fn seq2_gap(&self, seq1pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// The same gap penalty everywhere in both sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Uniform<S: Score> {
    pub gap: S,
}

impl<S: Score> Uniform<S> {
    pub fn new(gap: S) -> Self {
        Self { gap }
    }
}

impl<S: Score> PosInvariantScorer for Uniform<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.gap
    }
}
