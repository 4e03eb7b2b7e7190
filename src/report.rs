use crate::common::{Direction, Grid};
use crate::scenario::Scenario;
use crate::solver::Solution;
use crate::stat::Stats;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON summary of one solved scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub start: Grid,
    pub goal: Grid,
    pub cost: usize,
    pub moves: Vec<Direction>,
    pub states: Vec<Grid>,
    pub stats: Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explored: Option<Vec<Grid>>,
}

impl Report {
    pub fn new(scenario: &Scenario, solution: &Solution) -> Self {
        Report {
            start: scenario.start.clone(),
            goal: scenario.goal_grid(),
            cost: solution.cost(),
            moves: solution.moves.clone(),
            states: solution.states.iter().map(|s| s.to_grid()).collect(),
            stats: solution.stats.clone(),
            explored: solution
                .explored
                .as_ref()
                .map(|states| states.iter().map(|s| s.to_grid()).collect()),
        }
    }

    pub fn write_json(&self, path: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve, SolveOptions};

    #[test]
    fn test_report_serializes_moves_and_stats() {
        let scenario = Scenario {
            start: vec![vec![1, 2], vec![0, 3]],
            goal: None,
        };
        let solution =
            solve(&scenario.start, &scenario.goal_grid(), &SolveOptions::default()).unwrap();
        let report = Report::new(&scenario, &solution);

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cost"], 1);
        assert_eq!(json["moves"], serde_json::json!(["Right"]));
        assert_eq!(json["goal"], serde_json::json!([[1, 2], [3, 0]]));
        assert_eq!(json["stats"]["expanded_nodes"], 1);
        assert!(json.get("explored").is_none());
    }
}
