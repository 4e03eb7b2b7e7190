use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub cost: usize,
    pub time_us: u128,
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
    pub decreased_keys: usize,
    pub max_frontier: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Cost {:?} Time(microseconds) {:?} Expanded nodes: {:?} Generated nodes: {:?} Decreased keys: {:?} Peak frontier: {:?}",
            self.cost,
            self.time_us,
            self.expanded_nodes,
            self.generated_nodes,
            self.decreased_keys,
            self.max_frontier
        );
    }
}
