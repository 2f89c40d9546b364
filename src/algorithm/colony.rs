use log::info;
use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use crate::component::{Solution, Trace};
use crate::graph::Graph;
use crate::problem::Problem;
use crate::utils::config::{Parameters, Schedule};
use crate::utils::error::Result;
use super::Ant;
#[cfg(feature = "parallel")]
use rayon::prelude::*;


/// Why an `optimize` run returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stop {
    /// the iteration budget ran out
    Exhausted,
    /// the global best stopped improving
    Stalled,
}

/// Costs of one iteration, with the ant that found the cheapest path.
struct Ranking {
    leader: usize,
    min: f64,
    max: f64,
}

pub struct Colony<P: Problem> {
    graph: Graph<P>,
    params: Parameters,
    ants: Vec<Ant>,
    streams: Vec<ChaChaRng>,
    rng: ChaChaRng,
    best: Option<Solution>,
    history: Vec<f64>,
}

impl<P: Problem> Colony<P> {
    pub fn new(graph: Graph<P>, params: Parameters, seed: u64) -> Result<Self> {
        params.validate()?;
        let mut colony = Colony {
            graph,
            params,
            ants: vec![],
            streams: vec![],
            rng: ChaChaRng::seed_from_u64(seed),
            best: None,
            history: vec![],
        };
        colony.start_colony();
        Ok(colony)
    }
    /// Replaces every ant with a fresh one, drawing new starts and random
    /// streams. Local bests are lost; the global best and history are kept.
    pub fn start_colony(&mut self) {
        let limit = self.graph.node_count();
        let Parameters { ants, random_start, alpha, betha, .. } = self.params;
        self.ants.clear();
        self.streams.clear();
        for _ in 0..ants {
            let s_index = match random_start {
                true  => self.rng.gen_range(0..limit),
                false => 0,
            };
            self.ants.push(Ant::new(&self.graph, s_index, alpha, betha));
            self.streams.push(ChaChaRng::seed_from_u64(self.rng.gen()));
        }
    }
    pub fn graph(&self) -> &Graph<P> {
        &self.graph
    }
    pub fn graph_mut(&mut self) -> &mut Graph<P> {
        &mut self.graph
    }
    pub fn params(&self) -> &Parameters {
        &self.params
    }
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }
    /// Global best cost after each completed iteration.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
    /// Runs iterations until the budget is spent or the global best has not
    /// improved for `n_iter_no_change` iterations. Can be called again to
    /// resume.
    pub fn optimize(&mut self, schedule: &Schedule) -> Result<Stop> {
        let trace = Trace::new(schedule.verbose);
        let mut stall = 0;
        let first = self.history.len() + 1;
        for iter in first..first + schedule.max_iter {
            let ranking = self.iterate()?;
            let leader = &self.ants[ranking.leader];
            let candidate = leader.solution(ranking.min);
            if candidate.improves_on(self.best.as_ref()) {
                self.best = Some(candidate);
                stall = 0;
            } else {
                stall += 1;
            }
            let best = self.best.as_ref().map_or(ranking.min, |best| best.cost);
            self.history.push(best);
            trace.row(iter, ranking.min, ranking.max, best);
            if stall >= schedule.n_iter_no_change {
                info!("stalled at iteration {} with best cost {}", iter, best);
                return Ok(Stop::Stalled);
            }
        }
        info!("finished {} iterations with best cost {:?}", schedule.max_iter,
              self.best.as_ref().map(|best| best.cost));
        Ok(Stop::Exhausted)
    }
    /// One round of construction, deposit and evaporation. Every ant builds
    /// against the same pheromone; the store is written only afterwards.
    fn iterate(&mut self) -> Result<Ranking> {
        let costs = self.construct_paths()?;
        let pheromone = self.graph.pheromone_mut();
        for ant in self.ants.iter() {
            ant.pheromone_update(pheromone, self.params.phe_dep);
        }
        let order = rank(&costs);
        for &nth in order.iter().take(elite_count(self.params.elite_fraction, self.ants.len())) {
            self.ants[nth].pheromone_update(pheromone, self.params.elite_dep);
        }
        pheromone.evaporate(self.params.evap_rate);

        let leader = order[0];
        let last = order[order.len() - 1];
        Ok(Ranking { leader, min: costs[leader], max: costs[last] })
    }
    #[cfg(not(feature = "parallel"))]
    fn construct_paths(&mut self) -> Result<Vec<f64>> {
        let graph = &self.graph;
        self.ants.iter_mut()
            .zip(self.streams.iter_mut())
            .map(|(ant, rng)| ant.construct_path(graph, rng))
            .collect()
    }
    #[cfg(feature = "parallel")]
    fn construct_paths(&mut self) -> Result<Vec<f64>> {
        let graph = &self.graph;
        self.ants.par_iter_mut()
            .zip(self.streams.par_iter_mut())
            .map(|(ant, rng)| ant.construct_path(graph, rng))
            .collect()
    }
}

/// Ant indices sorted by ascending cost; ties keep ant order.
fn rank(costs: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..costs.len()).collect();
    order.sort_by_key(|&nth| OrderedFloat(costs[nth]));
    order
}

/// Number of elite ants, rounding half to even.
fn elite_count(elite_fraction: f64, ants: usize) -> usize {
    let count = (elite_fraction * ants as f64).round_ties_even() as usize;
    count.min(ants)
}
