use slide_astar::config::{Cli, Config};
use slide_astar::report::Report;
use slide_astar::scenario::Scenario;
use slide_astar::solver::{solve_states, TracingObserver};
use slide_astar::SolveError;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)
            .with_context(|| format!("failed to read config file: {config_file}"))?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let scenario = if let Some(scramble) = config.scramble {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Scenario::scramble(scramble.side, scramble.steps, &mut rng)?
    } else if let Some(puzzle_path) = config.puzzle_path.as_ref() {
        Scenario::load_from_file(puzzle_path)?
    } else {
        info!("No puzzle specified, using the built-in instance");
        Scenario::default()
    };

    let (start, goal) = scenario.states()?;
    info!("Start:\n{start}");
    info!("Goal:\n{goal}");

    match solve_states(start, &goal, &config.solve_options(), &mut TracingObserver) {
        Ok(solution) => {
            solution.stats.print();
            info!("Found optimal solution with {} moves", solution.cost());
            for state in solution.states.iter().skip(1) {
                if let Some(direction) = state.last_move() {
                    info!("{direction}\n{state}");
                }
            }

            if let Some(output_path) = config.output_path.as_ref() {
                Report::new(&scenario, &solution).write_json(output_path)?;
                info!("Report written to {output_path}");
            }
        }
        Err(SolveError::Unsolvable) => error!("goal not reachable"),
        Err(err) => return Err(err).context("solve fails"),
    }

    Ok(())
}
