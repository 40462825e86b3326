//! Needleman-Wunsch global alignment.
//!
//! The matrix is built first ([`build`]) and traced back afterwards ([`reconstruct`]).
//! Tracers observe both stages without being able to change the result.

pub use builder::{build, build_traced};
pub use engine::Engine;
pub use matrix::ScoreMatrix;
pub use traceback::{reconstruct, reconstruct_traced};
pub use tracer::{Candidates, LogTracer, Phase, Tracer, Tracers};

mod builder;
mod engine;
mod matrix;
mod traceback;
mod tracer;
