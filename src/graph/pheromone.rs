use super::EdgeIndex;

/// One pheromone level per edge, indexed by `EdgeIndex`.
#[derive(Clone, Debug)]
pub struct Pheromone {
    levels: Vec<f64>,
    init: f64,
}

impl Pheromone {
    pub fn new(edge_count: usize, init: f64) -> Self {
        let levels = vec![init; edge_count];
        Pheromone { levels, init }
    }
    pub fn init(&self) -> f64 {
        self.init
    }
    pub fn level(&self, edge: EdgeIndex) -> f64 {
        debug_assert!(edge.index() < self.levels.len());
        self.levels[edge.index()]
    }
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }
    pub fn total(&self) -> f64 {
        self.levels.iter().sum()
    }
    pub fn deposit(&mut self, edges: &[EdgeIndex], amount: f64) {
        for edge in edges {
            debug_assert!(edge.index() < self.levels.len());
            self.levels[edge.index()] += amount;
        }
    }
    /// Scales every level by `1 - rate`. Levels are not clamped.
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!(rate <= 1.0);
        let factor = 1.0 - rate;
        for level in self.levels.iter_mut() {
            *level *= factor;
        }
    }
    pub fn reset(&mut self) {
        let init = self.init;
        self.levels.iter_mut().for_each(|level| *level = init);
    }
}
