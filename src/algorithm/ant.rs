use rand::Rng;
use crate::component::Solution;
use crate::graph::{EdgeIndex, Graph, NodeIndex, Path, Pheromone, Tour, Trail};
use crate::problem::Problem;
use crate::utils::error::{Error, Result};
use super::choice;


/// A single solution finder. Its path state is rebuilt on every
/// construction; only the local best survives between them.
#[derive(Clone, Debug)]
pub struct Ant {
    alpha: f64,
    betha: f64,
    start: NodeIndex,
    visited: Tour,
    unvisited: Vec<bool>,
    remaining: usize,
    traveled: Path,
    local_best: Option<Solution>,
}

impl Ant {
    pub fn new<P: Problem>(graph: &Graph<P>, s_index: usize, alpha: f64, betha: f64) -> Self {
        Ant {
            alpha,
            betha,
            start: clamp_start(graph, s_index),
            visited: vec![],
            unvisited: vec![],
            remaining: 0,
            traveled: vec![],
            local_best: None,
        }
    }
    /// Moves the starting node; out-of-range indices fall back to the first
    /// node.
    pub fn new_start<P: Problem>(&mut self, graph: &Graph<P>, s_index: usize) {
        self.start = clamp_start(graph, s_index);
    }
    pub fn start(&self) -> NodeIndex {
        self.start
    }
    pub fn visited(&self) -> &[NodeIndex] {
        &self.visited
    }
    pub fn traveled(&self) -> &[EdgeIndex] {
        &self.traveled
    }
    pub fn local_best(&self) -> Option<&Solution> {
        self.local_best.as_ref()
    }
    pub fn solution(&self, cost: f64) -> Solution {
        Solution::new(cost, self.visited.clone(), self.traveled.clone())
    }
    fn reset(&mut self, node_count: usize) {
        self.visited.clear();
        self.traveled.clear();
        self.unvisited.clear();
        self.unvisited.resize(node_count, true);
        self.remaining = node_count;
    }
    fn visit(&mut self, node: NodeIndex) {
        debug_assert!(self.unvisited[node.index()]);
        self.unvisited[node.index()] = false;
        self.remaining -= 1;
        self.visited.push(node);
    }
    /// Edges from `pos` to unvisited nodes. Returning to the start is only
    /// allowed as the very last move.
    pub fn candidates<P: Problem>(&self, graph: &Graph<P>, pos: NodeIndex) -> Vec<EdgeIndex> {
        graph.outgoings(pos)
            .filter(|&e| {
                let end = graph.edge(e).end;
                self.unvisited[end.index()] && (self.remaining == 1 || end != self.start)
            })
            .collect()
    }
    /// Builds a closed tour from the start node and returns its cost.
    pub fn construct_path<P, R>(&mut self, graph: &Graph<P>, rng: &mut R) -> Result<f64>
    where
        P: Problem,
        R: Rng + ?Sized,
    {
        self.reset(graph.node_count());
        let mut pos = self.start;
        if graph.node_count() == 1 {
            self.visit(pos);
        }
        while self.remaining > 0 {
            let candidates = self.candidates(graph, pos);
            if candidates.is_empty() {
                return Err(Error::Unreachable {
                    start: self.start.index(),
                    at: pos.index(),
                    remaining: self.remaining,
                });
            }
            let weights = choice::weights(graph, &self.traveled, &candidates,
                                          self.alpha, self.betha);
            let edge = candidates[choice::roulette(&weights, rng)];
            self.traveled.push(edge);
            pos = graph.edge(edge).end;
            self.visit(pos);
        }
        let cost = graph.problem().cost(Trail::new(graph, &self.traveled));
        let solution = self.solution(cost);
        if solution.improves_on(self.local_best.as_ref()) {
            self.local_best = Some(solution);
        }
        Ok(cost)
    }
    /// Adds `delta` to every edge of the last constructed path.
    pub fn pheromone_update(&self, pheromone: &mut Pheromone, delta: f64) {
        pheromone.deposit(&self.traveled, delta);
    }
}

fn clamp_start<P: Problem>(graph: &Graph<P>, s_index: usize) -> NodeIndex {
    match s_index < graph.node_count() {
        true  => s_index.into(),
        false => 0.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Mode;
    use crate::problem::{FnProblem, Tsp};
    use crate::problem::tsp::Euclidean;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    fn pentagon() -> Graph<Tsp> {
        let tsp = Tsp::new("pentagon", Euclidean::new(vec![
            [0.0, 0.0], [2.0, 0.0], [3.0, 1.5], [1.0, 3.0], [-1.0, 1.5],
        ]));
        Graph::complete(tsp.cities(), tsp).unwrap()
    }

    fn assert_closed_tour<P: Problem>(graph: &Graph<P>, ant: &Ant) {
        let node_count = graph.node_count();
        assert_eq!(ant.traveled().len(), node_count);
        assert_eq!(ant.visited().len(), node_count);
        let mut seen = vec![false; node_count];
        for node in ant.visited() {
            assert!(!seen[node.index()], "node {:?} visited twice", node);
            seen[node.index()] = true;
        }
        assert_eq!(ant.visited().last(), Some(&ant.start()));
        let last = graph.edge(*ant.traveled().last().unwrap());
        assert_eq!(last.end, ant.start());
        let first = graph.edge(ant.traveled()[0]);
        assert_eq!(first.start, ant.start());
        for pair in ant.traveled().windows(2) {
            assert_eq!(graph.edge(pair[0]).end, graph.edge(pair[1]).start);
        }
    }

    #[test]
    fn it_constructs_closed_tour() {
        let graph = pentagon();
        let mut rng = ChaChaRng::seed_from_u64(420);
        for s_index in 0..5 {
            let mut ant = Ant::new(&graph, s_index, 1.0, 3.0);
            let cost = ant.construct_path(&graph, &mut rng).unwrap();
            assert_closed_tour(&graph, &ant);
            let expected: f64 = ant.traveled().iter().map(|&e| graph.edge(e).info).sum();
            assert_eq!(cost, expected);
        }
    }

    #[test]
    fn it_follows_the_ring_in_cyclic_mode() {
        let problem = FnProblem::new(
            |_: &char, _: &char| vec![1.0, 2.0],
            |path| path.iter().map(|e| e.info).sum(),
        );
        let graph = Graph::new(vec!['a', 'b', 'c', 'd'], problem, Mode::Cyclic, 0.1).unwrap();
        let mut ant = Ant::new(&graph, 2, 1.0, 3.0);
        let mut rng = ChaChaRng::seed_from_u64(7);
        let cost = ant.construct_path(&graph, &mut rng).unwrap();
        assert_closed_tour(&graph, &ant);
        let tour: Vec<_> = graph.tour_nodes(ant.visited()).into_iter().copied().collect();
        assert_eq!(tour, vec!['d', 'a', 'b', 'c']);
        assert!((4.0..=8.0).contains(&cost));
    }

    #[test]
    fn it_handles_single_node() {
        let problem = FnProblem::new(
            |_: &u8, _: &u8| vec![1.0],
            |path| if path.is_empty() { 42.0 } else { 0.0 },
        );
        let graph = Graph::complete(vec![9], problem).unwrap();
        let mut ant = Ant::new(&graph, 0, 1.0, 3.0);
        let cost = ant.construct_path(&graph, &mut ChaChaRng::seed_from_u64(0)).unwrap();
        assert_eq!(cost, 42.0);
        assert!(ant.traveled().is_empty());
        assert_eq!(ant.visited(), &[NodeIndex::from(0)]);
    }

    #[test]
    fn it_fails_on_dead_end() {
        // nothing leads into 'c'
        let problem = FnProblem::new(
            |_: &char, e: &char| if *e == 'c' { vec![] } else { vec![1.0] },
            |path| path.len() as f64,
        );
        let graph = Graph::complete(vec!['a', 'b', 'c'], problem).unwrap();
        let mut ant = Ant::new(&graph, 0, 1.0, 3.0);
        let result = ant.construct_path(&graph, &mut ChaChaRng::seed_from_u64(0));
        assert!(matches!(result,
            Err(Error::Unreachable { start: 0, at: 1, remaining: 2 })));
        assert!(ant.local_best().is_none());
    }

    #[test]
    fn it_clamps_start_index() {
        let graph = pentagon();
        let mut ant = Ant::new(&graph, 9, 1.0, 3.0);
        assert_eq!(ant.start(), 0.into());
        ant.new_start(&graph, 3);
        assert_eq!(ant.start(), 3.into());
        ant.new_start(&graph, 5);
        assert_eq!(ant.start(), 0.into());
    }

    #[test]
    fn it_keeps_the_local_best() {
        let graph = pentagon();
        let mut ant = Ant::new(&graph, 1, 1.0, 0.0);
        let mut rng = ChaChaRng::seed_from_u64(11);
        let mut lowest = f64::INFINITY;
        for _ in 0..30 {
            let cost = ant.construct_path(&graph, &mut rng).unwrap();
            lowest = lowest.min(cost);
            let best = ant.local_best().unwrap();
            assert_eq!(best.cost, lowest);
            assert_eq!(best.tour.len(), 5);
        }
    }

    #[test]
    fn it_deposits_along_its_path() {
        let mut graph = pentagon();
        let mut ant = Ant::new(&graph, 0, 1.0, 3.0);
        ant.construct_path(&graph, &mut ChaChaRng::seed_from_u64(3)).unwrap();
        ant.pheromone_update(graph.pheromone_mut(), 0.5);
        for (edge, _) in graph.edges() {
            let expected = match ant.traveled().contains(&edge) {
                true  => 0.6,
                false => 0.1,
            };
            assert!((graph.pheromone_on(edge) - expected).abs() < 1e-12);
        }
    }
}
