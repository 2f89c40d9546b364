mod solution;
mod trace;

pub use solution::Solution;
pub use trace::Trace;
