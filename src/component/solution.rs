use serde::Serialize;
use crate::graph::{Path, Tour};


/// A completed construction: its cost, the visited nodes and the traveled
/// edges. The tour lists nodes in arrival order, so a closed tour ends with
/// its starting node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub cost: f64,
    pub tour: Tour,
    pub path: Path,
}

impl Solution {
    pub fn new(cost: f64, tour: Tour, path: Path) -> Self {
        Solution { cost, tour, path }
    }
    /// True when there is nothing to beat or the cost is strictly lower.
    pub fn improves_on(&self, best: Option<&Solution>) -> bool {
        best.map_or(true, |best| self.cost < best.cost)
    }
}
