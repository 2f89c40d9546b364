mod pheromone;
mod topology;
mod trail;

pub use pheromone::Pheromone;
pub use topology::{Edge, EdgeIndex, Graph, Mode, NodeIndex};
pub use trail::Trail;

pub type Path = Vec<EdgeIndex>;
pub type Tour = Vec<NodeIndex>;
