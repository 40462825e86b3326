use std::marker::PhantomData;

use crate::pairwise::scoring::{gaps, symbols, Score};

/// Scheme assembled from independent symbol and gap scorers.
#[derive(Clone, Debug)]
pub struct Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    pub symbols: S,
    pub gaps: G,
    symbol: PhantomData<fn() -> Symbol>,
    score: PhantomData<ScoreType>,
}

impl<ScoreType, Symbol, S, G> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    pub fn new(symbols: S, gaps: G) -> Self {
        Delegate {
            symbols,
            gaps,
            symbol: Default::default(),
            score: Default::default(),
        }
    }
}

impl<ScoreType, Symbol, S, G> gaps::Scorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;

    #[inline(always)]
    fn seq1_gap(&self, seq2pos: usize) -> Self::Score {
        self.gaps.seq1_gap(seq2pos)
    }

    #[inline(always)]
    fn seq2_gap(&self, seq1pos: usize) -> Self::Score {
        self.gaps.seq2_gap(seq1pos)
    }
}

impl<ScoreType, Symbol, S, G> symbols::Scorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, posa: usize, a: &Self::Symbol, posb: usize, b: &Self::Symbol) -> Self::Score {
        self.symbols.score(posa, a, posb, b)
    }
}

impl<ScoreType, Symbol, S, G> super::Scheme for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;
}
