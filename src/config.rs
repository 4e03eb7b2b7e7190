use crate::algorithm::TieBreak;
use crate::common::{MAX_SIDE, MIN_SIDE};
use crate::solver::SolveOptions;

use anyhow::anyhow;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "Slide A*",
    about = "Optimal sliding-tile puzzle solver using A* with Manhattan distance.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the YAML scenario file")]
    pub puzzle_path: Option<String>,

    #[arg(long, help = "Scramble a canonical board of this side instead of loading one")]
    pub scramble_side: Option<usize>,

    #[arg(long, help = "Number of random slides when scrambling", default_value_t = 30)]
    pub scramble_steps: usize,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, help = "Tie-break rule between equal f costs")]
    pub tie_break: Option<TieBreak>,

    #[arg(long, help = "Abort after this many expansions")]
    pub max_expansions: Option<usize>,

    #[arg(long, help = "Abort after this many milliseconds")]
    pub time_limit_ms: Option<u64>,

    #[arg(long, help = "Report the expanded states", default_value_t = false)]
    pub report_explored: bool,

    #[arg(long, help = "Skip the parity pre-check", default_value_t = false)]
    pub no_parity_check: bool,

    #[arg(long, help = "Path to the JSON output file")]
    pub output_path: Option<String>,

    #[arg(long, help = "Log level, overridden by RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    pub side: usize,
    pub steps: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub puzzle_path: Option<String>,
    pub scramble: Option<ScrambleConfig>,
    pub seed: u64,
    pub tie_break: TieBreak,
    pub max_expansions: Option<usize>,
    pub time_limit_ms: Option<u64>,
    pub report_explored: bool,
    pub parity_check: bool,
    pub output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            puzzle_path: None,
            scramble: None,
            seed: 0,
            tie_break: TieBreak::default(),
            max_expansions: None,
            time_limit_ms: None,
            report_explored: false,
            parity_check: true,
            output_path: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(puzzle_path) = &cli.puzzle_path {
            self.puzzle_path = Some(puzzle_path.clone());
            self.scramble = None;
        }
        if let Some(side) = cli.scramble_side {
            self.scramble = Some(ScrambleConfig {
                side,
                steps: cli.scramble_steps,
            });
            self.puzzle_path = None;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(tie_break) = cli.tie_break {
            self.tie_break = tie_break;
        }
        if cli.max_expansions.is_some() {
            self.max_expansions = cli.max_expansions;
        }
        if cli.time_limit_ms.is_some() {
            self.time_limit_ms = cli.time_limit_ms;
        }
        if cli.report_explored {
            self.report_explored = true;
        }
        if cli.no_parity_check {
            self.parity_check = false;
        }
        if let Some(output_path) = &cli.output_path {
            self.output_path = Some(output_path.clone());
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.puzzle_path.is_some() && self.scramble.is_some() {
            return Err(anyhow!(
                "puzzle_path and scramble are mutually exclusive"
            ));
        }

        if let Some(scramble) = &self.scramble {
            if !(MIN_SIDE..=MAX_SIDE).contains(&scramble.side) {
                return Err(anyhow!(
                    "Scramble side must be within {MIN_SIDE}..={MAX_SIDE}, got {}",
                    scramble.side
                ));
            }
        }

        if self.time_limit_ms == Some(0) {
            return Err(anyhow!("Time limit must be greater than 0 ms"));
        }
        Ok(())
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            tie_break: self.tie_break,
            max_expansions: self.max_expansions,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
            report_explored: self.report_explored,
            parity_check: self.parity_check,
            cancel: None,
        }
    }
}
