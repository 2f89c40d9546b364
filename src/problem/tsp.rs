use enum_dispatch::enum_dispatch;
use crate::graph::{Edge, Trail};
use crate::utils::error::{Error, Result};
use super::Problem;


/// Distances between cities numbered `0..size`.
#[enum_dispatch]
pub trait Landscape {
    fn size(&self) -> usize;
    fn distance(&self, from: usize, to: usize) -> Option<f64>;
}

#[enum_dispatch(Landscape)]
#[derive(Clone, Debug)]
pub enum LandscapeEnum {
    Euclidean,
    Matrix,
}

/// Cities on a plane, every pair connected.
#[derive(Clone, Debug)]
pub struct Euclidean {
    coords: Vec<[f64; 2]>,
}

/// Explicit distances; `None` means there is no road.
#[derive(Clone, Debug)]
pub struct Matrix {
    distances: Vec<Vec<Option<f64>>>,
}

impl Euclidean {
    pub fn new(coords: Vec<[f64; 2]>) -> Self {
        Euclidean { coords }
    }
}

impl Landscape for Euclidean {
    fn size(&self) -> usize {
        self.coords.len()
    }
    fn distance(&self, from: usize, to: usize) -> Option<f64> {
        let a = self.coords.get(from)?;
        let b = self.coords.get(to)?;
        Some((a[0] - b[0]).hypot(a[1] - b[1]))
    }
}

impl Matrix {
    pub fn new(distances: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let size = distances.len();
        if let Some(row) = distances.iter().position(|row| row.len() != size) {
            return Err(Error::MalformedMatrix(row));
        }
        Ok(Matrix { distances })
    }
}

impl Landscape for Matrix {
    fn size(&self) -> usize {
        self.distances.len()
    }
    fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.distances.get(from)?.get(to).copied().flatten()
    }
}


/// Travelling salesman: visit every city once and return, minimizing the
/// total distance.
#[derive(Clone, Debug)]
pub struct Tsp {
    name: String,
    landscape: LandscapeEnum,
}

impl Tsp {
    pub fn new(name: &str, landscape: impl Into<LandscapeEnum>) -> Self {
        Tsp { name: name.to_owned(), landscape: landscape.into() }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn landscape(&self) -> &LandscapeEnum {
        &self.landscape
    }
    pub fn cities(&self) -> Vec<usize> {
        (0..self.landscape.size()).collect()
    }
    /// Length of the closed tour through `tour`, if every leg exists.
    pub fn tour_length(&self, tour: &[usize]) -> Option<f64> {
        if tour.is_empty() {
            return Some(0.0);
        }
        let closing = tour.iter().skip(1).chain(tour.first());
        tour.iter()
            .zip(closing)
            .map(|(&from, &to)| self.landscape.distance(from, to))
            .sum()
    }
}

impl Problem for Tsp {
    type Node = usize;
    type Info = f64;

    fn rule(&self, start: &usize, end: &usize) -> Vec<f64> {
        self.landscape.distance(*start, *end).into_iter().collect()
    }
    fn cost(&self, path: Trail<'_, Self>) -> f64 {
        path.iter().map(|edge| edge.info).sum()
    }
    fn has_heuristic(&self) -> bool {
        true
    }
    fn heuristic(&self, _traveled: Trail<'_, Self>, candidate: &Edge<f64>) -> f64 {
        candidate.info
    }
}
