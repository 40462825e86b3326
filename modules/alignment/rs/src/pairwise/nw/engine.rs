use std::marker::PhantomData;

use eyre::Result;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::pairwise::{alignment, scoring};
use crate::{Alignable, Score};

use super::tracer::Tracer;
use super::{builder, traceback};

/// Global aligner: a scoring scheme plus an optional thread pool for batch workloads.
///
/// Every call allocates its own score matrix, nothing is shared between alignments.
pub struct Engine<S, Smb, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    scoring: Scheme,
    thread_pool: Option<ThreadPool>,
    _phantom: PhantomData<fn() -> (S, Smb)>,
}

impl<S, Smb, Scheme> Engine<S, Smb, Scheme>
where
    S: Score,
    Smb: Copy + PartialEq,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    pub fn new(scoring: Scheme) -> Self {
        Self {
            scoring,
            thread_pool: None,
            _phantom: Default::default(),
        }
    }

    pub fn with_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    /// Replaces the scoring scheme in place.
    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn align<S1, S2>(&self, seq1: &S1, seq2: &S2) -> Result<alignment::Alignment<S, Smb>>
    where
        S1: Alignable<Symbol = Smb> + ?Sized,
        S2: Alignable<Symbol = Smb> + ?Sized,
    {
        self.align_traced(seq1, seq2, &mut ())
    }

    /// Aligns two sequences, reporting both the matrix fill and the traceback to the tracer.
    pub fn align_traced<S1, S2, T>(
        &self,
        seq1: &S1,
        seq2: &S2,
        tracer: &mut T,
    ) -> Result<alignment::Alignment<S, Smb>>
    where
        S1: Alignable<Symbol = Smb> + ?Sized,
        S2: Alignable<Symbol = Smb> + ?Sized,
        T: Tracer<S, Smb> + ?Sized,
    {
        let matrix = builder::build_traced(seq1, seq2, &self.scoring, &mut *tracer)?;
        traceback::reconstruct_traced(seq1, seq2, &self.scoring, &matrix, tracer)
    }

    /// Aligns every pair in parallel. Results follow the order of `pairs`.
    pub fn align_all<S1, S2>(&self, pairs: &[(S1, S2)]) -> Vec<Result<alignment::Alignment<S, Smb>>>
    where
        S1: Alignable<Symbol = Smb> + Sync,
        S2: Alignable<Symbol = Smb> + Sync,
        Smb: Send,
        Scheme: Sync,
    {
        let run = || -> Vec<_> {
            pairs
                .par_iter()
                .map(|(seq1, seq2)| self.align(seq1, seq2))
                .collect()
        };
        let results = match &self.thread_pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let failed = results.iter().filter(|x| x.is_err()).count();
        if failed > 0 {
            log::warn!("{} out of {} pairs failed to align", failed, results.len());
        }
        results
    }
}

impl<S, Smb, Scheme> Default for Engine<S, Smb, Scheme>
where
    S: Score,
    Smb: Copy + PartialEq,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb> + Default,
{
    fn default() -> Self {
        Self::new(Scheme::default())
    }
}
