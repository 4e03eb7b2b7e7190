use anyhow::{Context, Result};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::rc::Rc;
use tracing::info;

use crate::common::{canonical_goal, Direction, Grid, State};
use crate::error::{PuzzleError, SolveError};

/// A puzzle instance. A scenario file without a goal targets the canonical
/// layout of the start's size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: Grid,
    #[serde(default)]
    pub goal: Option<Grid>,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            start: vec![vec![1, 8, 2], vec![4, 0, 5], vec![7, 3, 6]],
            goal: Some(canonical_goal(3)),
        }
    }
}

impl Scenario {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
        let reader = BufReader::new(file);
        let scenario = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {path}"))?;
        Ok(scenario)
    }

    pub fn write_to_yaml(&self, path: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        let yaml_data = serde_yaml::to_string(self)?;
        writer.write_all(yaml_data.as_bytes())?;

        Ok(())
    }

    pub fn goal_grid(&self) -> Grid {
        self.goal
            .clone()
            .unwrap_or_else(|| canonical_goal(self.start.len()))
    }

    /// Validated start and goal states.
    pub fn states(&self) -> Result<(State, State), SolveError> {
        let start = State::create(&self.start)?;
        let goal = State::create(&self.goal_grid())?;
        if start.side() != goal.side() {
            return Err(PuzzleError::SizeMismatch {
                start: start.side(),
                goal: goal.side(),
            }
            .into());
        }
        Ok((start, goal))
    }

    /// Random walk of `steps` slides away from the canonical goal, never
    /// undoing the previous slide. Always solvable.
    pub fn scramble<R: Rng + ?Sized>(side: usize, steps: usize, rng: &mut R) -> Result<Self> {
        let goal = canonical_goal(side);
        let mut current = Rc::new(State::create(&goal)?);
        let mut last: Option<Direction> = None;

        for _ in 0..steps {
            let candidates: Vec<State> = Direction::ALL
                .into_iter()
                .filter(|direction| last != Some(direction.opposite()))
                .filter_map(|direction| current.apply_move(direction).ok())
                .collect();
            let next = candidates
                .choose(rng)
                .context("no legal slide available")?
                .clone();
            last = next.last_move();
            current = Rc::new(next);
        }

        let scenario = Scenario {
            start: current.to_grid(),
            goal: Some(goal),
        };
        info!("Generate scramble ({steps} steps):\n{current}");
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_reachable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_read_scenario() {
        let yaml = "start:\n  - [1, 8, 2]\n  - [4, 0, 5]\n  - [7, 3, 6]\ngoal:\n  - [1, 2, 3]\n  - [4, 5, 6]\n  - [7, 8, 0]\n";
        let scenario = Scenario::from_yaml_str(yaml).unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn test_missing_goal_defaults_to_canonical() {
        let scenario = Scenario::from_yaml_str("start: [[3, 1], [2, 0]]").unwrap();
        assert_eq!(scenario.goal, None);
        assert_eq!(scenario.goal_grid(), vec![vec![1, 2], vec![3, 0]]);
        assert!(scenario.states().is_ok());
    }

    #[test]
    fn test_states_reject_size_mismatch() {
        let scenario = Scenario {
            start: canonical_goal(2),
            goal: Some(canonical_goal(3)),
        };
        assert_eq!(
            scenario.states().unwrap_err(),
            SolveError::InvalidPuzzle(PuzzleError::SizeMismatch { start: 2, goal: 3 })
        );
    }

    #[test]
    fn test_scramble_is_reproducible_and_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = Scenario::scramble(4, 40, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let second = Scenario::scramble(4, 40, &mut rng).unwrap();
        assert_eq!(first, second);

        let (start, goal) = first.states().unwrap();
        assert!(is_reachable(&start, &goal));
    }

    #[test]
    fn test_scramble_zero_steps_is_goal() {
        let mut rng = StdRng::seed_from_u64(0);
        let scenario = Scenario::scramble(3, 0, &mut rng).unwrap();
        assert_eq!(scenario.start, canonical_goal(3));
    }

    #[test]
    fn test_write_and_load_round_trip() {
        let path = std::env::temp_dir().join("slide_astar_scenario_test.yaml");
        let path = path.to_str().unwrap();
        Scenario::default().write_to_yaml(path).unwrap();
        assert_eq!(Scenario::load_from_file(path).unwrap(), Scenario::default());
        let _ = std::fs::remove_file(path);
    }
}
