use itertools::{Itertools, MinMaxResult};
use rand::Rng;
use crate::graph::{EdgeIndex, Graph, Trail};
use crate::problem::Problem;


/// Selection probabilities of `candidates`, summing to one.
///
/// With a heuristic and a non-zero `betha`, pheromone and heuristic are
/// normalized separately and blended by `alpha` and `betha`; lower heuristic
/// scores weigh more. Otherwise the pheromone alone decides.
pub fn weights<P: Problem>(
    graph: &Graph<P>,
    traveled: &[EdgeIndex],
    candidates: &[EdgeIndex],
    alpha: f64,
    betha: f64,
) -> Vec<f64> {
    debug_assert!(!candidates.is_empty());
    let levels = candidates.iter()
        .map(|&edge| graph.pheromone_on(edge))
        .collect();
    let pheromone = normalize(levels);

    let problem = graph.problem();
    if !problem.has_heuristic() || betha == 0.0 {
        return pheromone;
    }
    let trail = Trail::new(graph, traveled);
    let scores: Vec<f64> = candidates.iter()
        .map(|&edge| problem.heuristic(trail, graph.edge(edge)))
        .collect();
    let heuristic = normalize(attractiveness(&scores));

    pheromone.iter()
        .zip(heuristic.iter())
        .map(|(p, h)| (alpha * p + betha * h) / (alpha + betha))
        .collect()
}

/// Rescales scores so the lowest becomes 1 and the highest 0; equal scores
/// are all equally attractive.
fn attractiveness(scores: &[f64]) -> Vec<f64> {
    match scores.iter().minmax() {
        MinMaxResult::MinMax(&min, &max) if max > min => scores.iter()
            .map(|score| (max - score) / (max - min))
            .collect(),
        _ => vec![1.0; scores.len()],
    }
}

/// Divides by the sum, or spreads uniformly when the sum cannot be divided.
fn normalize(mut weights: Vec<f64>) -> Vec<f64> {
    let sum: f64 = weights.iter().sum();
    if sum > 0.0 && sum.is_finite() {
        weights.iter_mut().for_each(|w| *w /= sum);
    } else {
        let uniform = 1.0 / weights.len() as f64;
        weights.iter_mut().for_each(|w| *w = uniform);
    }
    weights
}

/// Index drawn with probability proportional to `weights`. Falls back to the
/// last index when rounding leaves the accumulation short of the draw.
pub fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty());
    let draw: f64 = rng.gen();
    let mut accumulation = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        accumulation += weight;
        if draw < accumulation {
            return i;
        }
    }
    weights.len() - 1
}
