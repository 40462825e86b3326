pub use alignment::Alignment;
pub use op::Op;
pub use step::Step;
pub use utils::GAP;

pub mod alignment;
mod op;
pub mod step;
pub mod utils;
