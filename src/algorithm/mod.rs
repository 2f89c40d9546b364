mod ant;
mod colony;

pub mod choice;

pub use ant::Ant;
pub use colony::{Colony, Stop};
