use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("graph needs at least one node")]
    EmptyGraph,
    #[error("node #{0:02} duplicates an earlier node")]
    DuplicateNode(usize),
    #[error("initial pheromone {0} is not a non-negative number")]
    InvalidPheromone(f64),
    #[error("colony needs a positive number of ants")]
    NoAnts,
    #[error("{0} = {1} lies outside [0, 1]")]
    OutOfUnitRange(&'static str, f64),
    #[error("{0} = {1} is negative")]
    NegativeWeight(&'static str, f64),
    #[error("ant from node #{start:02} stuck at node #{at:02} with {remaining} nodes unvisited")]
    Unreachable { start: usize, at: usize, remaining: usize },
    #[error("distance matrix row #{0:02} has the wrong length")]
    MalformedMatrix(usize),
    #[error("failed to read {0}")]
    Io(String, #[source] std::io::Error),
    #[error("failed to parse {0}")]
    Yaml(String, #[source] serde_yaml::Error),
}

impl Error {
    /// Whether the error was raised while validating inputs, before any
    /// iteration ran.
    pub fn is_configuration(&self) -> bool {
        matches!(self,
            Error::EmptyGraph
            | Error::DuplicateNode(_)
            | Error::InvalidPheromone(_)
            | Error::NoAnts
            | Error::OutOfUnitRange(..)
            | Error::NegativeWeight(..)
            | Error::MalformedMatrix(_))
    }
}
