pub use nwalign_core_rs::alignment::Alignable;

use nwalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Alignment scores are signed primitive integers
pub trait Score: PrimSInt + Send + Sync {}

impl<T: PrimSInt + Send + Sync> Score for T {}
