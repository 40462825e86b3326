pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod symbols;

/// Complete scoring scheme: symbol pairs and gaps are scored with the same score type.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

/// Classic linear scheme: a fixed reward for identical symbols, a fixed penalty for different
/// ones and a fixed penalty for every gapped column.
pub type Linear<S, Symbol> = Delegate<S, Symbol, symbols::Equality<S, Symbol>, gaps::Uniform<S>>;

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}

pub fn linear<S: Score, Symbol: PartialEq>(
    match_score: S,
    mismatch_score: S,
    gap_score: S,
) -> Linear<S, Symbol> {
    compose(
        symbols::Equality::new(match_score, mismatch_score),
        gaps::Uniform::new(gap_score),
    )
}

impl<S: Score, Symbol: PartialEq> Default for Linear<S, Symbol> {
    /// match = 2, mismatch = -1, gap = -1
    fn default() -> Self {
        let one = S::one();
        linear(one + one, -one, -one)
    }
}
