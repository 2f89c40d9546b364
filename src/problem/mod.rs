use std::hash::Hash;
use crate::graph::{Edge, Trail};

pub mod tsp;

pub use tsp::Tsp;

/// Thread-safety required from problem types, only under the `parallel`
/// feature where paths are constructed on a thread pool.
#[cfg(feature = "parallel")]
pub trait Shareable: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

#[cfg(not(feature = "parallel"))]
pub trait Shareable {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> Shareable for T {}

/// Caller-supplied policies defining the optimization problem.
pub trait Problem: Sized + Shareable {
    type Node: Eq + Hash + Clone + Shareable;
    type Info: Shareable;

    /// Infos of the edges to create from `start` to `end`; one edge each.
    fn rule(&self, start: &Self::Node, end: &Self::Node) -> Vec<Self::Info>;
    /// Cost of a completed path.
    fn cost(&self, path: Trail<'_, Self>) -> f64;
    fn has_heuristic(&self) -> bool {
        false
    }
    /// Score of `candidate` given the edges traveled so far. Lower scores are
    /// more attractive.
    fn heuristic(&self, _traveled: Trail<'_, Self>, _candidate: &Edge<Self::Info>) -> f64 {
        0.0
    }
}

pub type RuleFn<N, I> = Box<dyn Fn(&N, &N) -> Vec<I> + Send + Sync>;
pub type CostFn<I> = Box<dyn Fn(&[&Edge<I>]) -> f64 + Send + Sync>;
pub type HeuristicFn<I> = Box<dyn Fn(&[&Edge<I>], &Edge<I>) -> f64 + Send + Sync>;

/// A `Problem` assembled from closures. Edges refer to nodes by their position
/// in the node sequence the graph was built from.
pub struct FnProblem<N, I> {
    rule: RuleFn<N, I>,
    cost: CostFn<I>,
    heuristic: Option<HeuristicFn<I>>,
}

impl<N, I> FnProblem<N, I> {
    pub fn new<R, C>(rule: R, cost: C) -> Self
    where
        R: Fn(&N, &N) -> Vec<I> + Send + Sync + 'static,
        C: Fn(&[&Edge<I>]) -> f64 + Send + Sync + 'static,
    {
        FnProblem { rule: Box::new(rule), cost: Box::new(cost), heuristic: None }
    }
    pub fn with_heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Fn(&[&Edge<I>], &Edge<I>) -> f64 + Send + Sync + 'static,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }
}

impl<N, I> Problem for FnProblem<N, I>
where
    N: Eq + Hash + Clone + Shareable,
    I: Shareable,
{
    type Node = N;
    type Info = I;

    fn rule(&self, start: &N, end: &N) -> Vec<I> {
        (self.rule)(start, end)
    }
    fn cost(&self, path: Trail<'_, Self>) -> f64 {
        let edges: Vec<_> = path.iter().collect();
        (self.cost)(edges.as_slice())
    }
    fn has_heuristic(&self) -> bool {
        self.heuristic.is_some()
    }
    fn heuristic(&self, traveled: Trail<'_, Self>, candidate: &Edge<I>) -> f64 {
        match &self.heuristic {
            Some(heuristic) => {
                let edges: Vec<_> = traveled.iter().collect();
                heuristic(edges.as_slice(), candidate)
            }
            None => 0.0,
        }
    }
}
