use std::fmt::{Display, Formatter};

use derive_more::Constructor;
use log::Level;

use crate::pairwise::Op;
use crate::Score;

use super::matrix::ScoreMatrix;

/// Stages of the global alignment reported to tracers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Phase {
    /// Boundary row and column initialization.
    Init,
    /// Row-major fill of the inner cells.
    Fill,
    /// One backward step of the traceback.
    TracebackStep,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Fill => "fill",
            Phase::TracebackStep => "traceback-step",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores of the three moves leading into a cell and the one that was kept.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Candidates<S> {
    pub diagonal: S,
    pub up: S,
    pub left: S,
    pub best: S,
}

impl<S: Score> Candidates<S> {
    pub fn new(diagonal: S, up: S, left: S) -> Self {
        Self {
            diagonal,
            up,
            left,
            best: diagonal.max(up).max(left),
        }
    }
}

// Both stages of the algorithm notify tracers about each step.
// Tracers only observe: the matrix is borrowed immutably and nothing flows back into the engine.
#[allow(unused_variables)]
pub trait Tracer<S: Score, Symbol> {
    /// Boundary cell (row, col) was written.
    fn init(&mut self, row: usize, col: usize, matrix: &ScoreMatrix<S>) {}

    /// Inner cell (row, col) was written with `candidates.best`.
    fn fill(&mut self, row: usize, col: usize, candidates: &Candidates<S>, matrix: &ScoreMatrix<S>) {}

    /// Traceback left cell (row, col) with `op`.
    /// `aligned1` and `aligned2` are the alignment suffixes reconstructed so far, in reading order.
    fn step(
        &mut self,
        row: usize,
        col: usize,
        op: Op,
        aligned1: &[Option<Symbol>],
        aligned2: &[Option<Symbol>],
    ) {
    }
}

impl<S: Score, Symbol> Tracer<S, Symbol> for () {}

impl<S: Score, Symbol, T: Tracer<S, Symbol> + ?Sized> Tracer<S, Symbol> for &mut T {
    #[inline(always)]
    fn init(&mut self, row: usize, col: usize, matrix: &ScoreMatrix<S>) {
        (**self).init(row, col, matrix);
    }

    #[inline(always)]
    fn fill(&mut self, row: usize, col: usize, candidates: &Candidates<S>, matrix: &ScoreMatrix<S>) {
        (**self).fill(row, col, candidates, matrix);
    }

    #[inline(always)]
    fn step(
        &mut self,
        row: usize,
        col: usize,
        op: Op,
        aligned1: &[Option<Symbol>],
        aligned2: &[Option<Symbol>],
    ) {
        (**self).step(row, col, op, aligned1, aligned2);
    }
}

/// Notifies two tracers, first then second.
#[derive(Clone, Debug, Default, Constructor)]
pub struct Tracers<A, B> {
    pub first: A,
    pub second: B,
}

impl<S, Symbol, A, B> Tracer<S, Symbol> for Tracers<A, B>
where
    S: Score,
    A: Tracer<S, Symbol>,
    B: Tracer<S, Symbol>,
{
    #[inline(always)]
    fn init(&mut self, row: usize, col: usize, matrix: &ScoreMatrix<S>) {
        self.first.init(row, col, matrix);
        self.second.init(row, col, matrix);
    }

    #[inline(always)]
    fn fill(&mut self, row: usize, col: usize, candidates: &Candidates<S>, matrix: &ScoreMatrix<S>) {
        self.first.fill(row, col, candidates, matrix);
        self.second.fill(row, col, candidates, matrix);
    }

    #[inline(always)]
    fn step(
        &mut self,
        row: usize,
        col: usize,
        op: Op,
        aligned1: &[Option<Symbol>],
        aligned2: &[Option<Symbol>],
    ) {
        self.first.step(row, col, op, aligned1, aligned2);
        self.second.step(row, col, op, aligned1, aligned2);
    }
}

/// Writes every event to the `log` facade.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LogTracer {
    level: Level,
}

impl LogTracer {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LogTracer {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl<S: Score + Display, Symbol> Tracer<S, Symbol> for LogTracer {
    fn init(&mut self, row: usize, col: usize, matrix: &ScoreMatrix<S>) {
        log::log!(
            self.level,
            "[{}] boundary cell ({row}, {col}) = {}",
            Phase::Init,
            matrix[(row, col)]
        );
    }

    fn fill(&mut self, row: usize, col: usize, candidates: &Candidates<S>, _: &ScoreMatrix<S>) {
        log::log!(
            self.level,
            "[{}] filling cell ({row}, {col}): diagonal {}, up {}, left {} -> {}",
            Phase::Fill,
            candidates.diagonal,
            candidates.up,
            candidates.left,
            candidates.best
        );
    }

    fn step(
        &mut self,
        row: usize,
        col: usize,
        op: Op,
        aligned1: &[Option<Symbol>],
        _: &[Option<Symbol>],
    ) {
        log::log!(
            self.level,
            "[{}] leaving cell ({row}, {col}) with '{}', {} column(s) aligned",
            Phase::TracebackStep,
            op.symbol(),
            aligned1.len()
        );
    }
}
