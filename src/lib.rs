pub mod algorithm;
pub mod component;
pub mod graph;
pub mod problem;
pub mod utils;

pub use algorithm::{Ant, Colony, Stop};
pub use component::Solution;
pub use graph::{Edge, EdgeIndex, Graph, Mode, NodeIndex, Pheromone, Trail};
pub use problem::{FnProblem, Problem, Tsp};
pub use utils::config::{Config, Parameters, Schedule};
pub use utils::error::{Error, Result};

pub const INIT_PHEROMONE: f64 = 0.1;
pub const ANTS: usize = 20;
pub const ALPHA: f64 = 1.0;
pub const BETHA: f64 = 3.0;
pub const PHE_DEP: f64 = 1.0;
pub const EVAP_RATE: f64 = 0.2;
pub const ELITE_FRACTION: f64 = 0.3;
pub const ELITE_DEP: f64 = 1.0;
pub const MAX_ITER: usize = 50;
pub const N_ITER_NO_CHANGE: usize = 10;
pub const SEED: u64 = 420;
