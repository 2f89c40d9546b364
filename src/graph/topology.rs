use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use crate::problem::Problem;
use crate::utils::error::{Error, Result};
use crate::INIT_PHEROMONE;
use super::Pheromone;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    fn new(ix: usize) -> Self {
        EdgeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeIndex {
    fn from(ix: usize) -> Self {
        EdgeIndex::new(ix)
    }
}

/// How edges are generated from the node sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every ordered pair of distinct nodes.
    Complete,
    /// Only consecutive nodes, read as a ring.
    Cyclic,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Complete
    }
}

#[derive(Clone, Debug)]
pub struct Edge<I> {
    pub start: NodeIndex,
    pub end: NodeIndex,
    pub info: I,
}

impl<I> Edge<I> {
    pub fn new(start: NodeIndex, end: NodeIndex, info: I) -> Self {
        Edge { start, end, info }
    }
}

/// Nodes and edges of a problem. The topology is fixed once built, only the
/// pheromone levels change afterwards.
pub struct Graph<P: Problem> {
    problem: P,
    nodes: Vec<P::Node>,
    index: HashMap<P::Node, NodeIndex>,
    edges: Vec<Edge<P::Info>>,
    outgoings: Vec<Vec<EdgeIndex>>,
    mode: Mode,
    pheromone: Pheromone,
}

impl<P: Problem> Graph<P> {
    pub fn new(nodes: Vec<P::Node>, problem: P, mode: Mode, init_pheromone: f64)
        -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyGraph);
        }
        if !init_pheromone.is_finite() || init_pheromone < 0.0 {
            return Err(Error::InvalidPheromone(init_pheromone));
        }
        let mut index = HashMap::with_capacity(nodes.len());
        for (ix, node) in nodes.iter().enumerate() {
            if index.insert(node.clone(), NodeIndex::new(ix)).is_some() {
                return Err(Error::DuplicateNode(ix));
            }
        }
        let outgoings = vec![vec![]; nodes.len()];
        let mut graph = Graph {
            problem,
            nodes,
            index,
            edges: vec![],
            outgoings,
            mode,
            pheromone: Pheromone::new(0, init_pheromone),
        };
        graph.add_edges();
        graph.pheromone = Pheromone::new(graph.edges.len(), init_pheromone);
        Ok(graph)
    }
    pub fn complete(nodes: Vec<P::Node>, problem: P) -> Result<Self> {
        Self::new(nodes, problem, Mode::Complete, INIT_PHEROMONE)
    }
    pub fn cyclic(nodes: Vec<P::Node>, problem: P) -> Result<Self> {
        Self::new(nodes, problem, Mode::Cyclic, INIT_PHEROMONE)
    }
    fn pairs(&self) -> Vec<(NodeIndex, NodeIndex)> {
        let count = self.nodes.len();
        match self.mode {
            Mode::Complete => (0..count)
                .flat_map(|start| (0..count).map(move |end| (start, end)))
                .filter(|(start, end)| start != end)
                .map(|(start, end)| (start.into(), end.into()))
                .collect(),
            // the ring starts with the closing pair (last, first)
            Mode::Cyclic => (0..count)
                .map(|end| ((end + count - 1) % count, end))
                .filter(|(start, end)| start != end)
                .map(|(start, end)| (start.into(), end.into()))
                .collect(),
        }
    }
    fn add_edges(&mut self) {
        for (start, end) in self.pairs() {
            let infos = self.problem.rule(self.node(start), self.node(end));
            for info in infos {
                self.outgoings[start.index()].push(EdgeIndex::new(self.edges.len()));
                self.edges.push(Edge::new(start, end, info));
            }
        }
    }
    pub fn problem(&self) -> &P {
        &self.problem
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn nodes(&self) -> &[P::Node] {
        &self.nodes
    }
    pub fn node(&self, node: NodeIndex) -> &P::Node {
        debug_assert!(node.index() < self.nodes.len());
        &self.nodes[node.index()]
    }
    pub fn index_of(&self, node: &P::Node) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }
    pub fn edge(&self, edge: EdgeIndex) -> &Edge<P::Info> {
        debug_assert!(edge.index() < self.edges.len());
        &self.edges[edge.index()]
    }
    pub fn edges(&self) -> impl Iterator<Item=(EdgeIndex, &Edge<P::Info>)> + '_ {
        self.edges.iter()
            .enumerate()
            .map(|(ix, edge)| (EdgeIndex::new(ix), edge))
    }
    pub fn endpoints(&self, edge: EdgeIndex) -> (&P::Node, &P::Node) {
        let edge = self.edge(edge);
        (self.node(edge.start), self.node(edge.end))
    }
    /// Edges leaving `node`, in creation order.
    pub fn outgoings(&self, node: NodeIndex)
        -> impl Iterator<Item=EdgeIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.outgoings[node.index()].iter().cloned()
    }
    pub fn tour_nodes(&self, tour: &[NodeIndex]) -> Vec<&P::Node> {
        tour.iter().map(|&node| self.node(node)).collect()
    }
    pub fn pheromone(&self) -> &Pheromone {
        &self.pheromone
    }
    pub fn pheromone_mut(&mut self) -> &mut Pheromone {
        &mut self.pheromone
    }
    pub fn pheromone_on(&self, edge: EdgeIndex) -> f64 {
        self.pheromone.level(edge)
    }
    pub fn reset(&mut self) {
        self.pheromone.reset();
    }
}
