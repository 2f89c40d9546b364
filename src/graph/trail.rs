use crate::problem::Problem;
use super::{Edge, EdgeIndex, Graph};

/// Read-only view of an ordered edge sequence, handed to cost and heuristic
/// policies.
pub struct Trail<'a, P: Problem> {
    graph: &'a Graph<P>,
    edges: &'a [EdgeIndex],
}

impl<'a, P: Problem> Clone for Trail<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P: Problem> Copy for Trail<'a, P> {}

impl<'a, P: Problem> Trail<'a, P> {
    pub fn new(graph: &'a Graph<P>, edges: &'a [EdgeIndex]) -> Self {
        Trail { graph, edges }
    }
    pub fn graph(&self) -> &'a Graph<P> {
        self.graph
    }
    pub fn indices(&self) -> &'a [EdgeIndex] {
        self.edges
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item=&'a Edge<P::Info>> + 'a {
        let graph = self.graph;
        self.edges.iter().map(move |&e| graph.edge(e))
    }
    pub fn last(&self) -> Option<&'a Edge<P::Info>> {
        self.edges.last().map(|&e| self.graph.edge(e))
    }
    /// Nodes along the trail, starting with the first edge's start.
    pub fn nodes(&self) -> Vec<&'a P::Node> {
        let graph = self.graph;
        let head = self.edges.first()
            .map(|&e| graph.node(graph.edge(e).start));
        let tail = self.edges.iter()
            .map(|&e| graph.node(graph.edge(e).end));
        head.into_iter().chain(tail).collect()
    }
}
