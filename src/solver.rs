use crate::algorithm::{a_star_search, is_reachable, ExploredSet, TieBreak};
use crate::common::{Direction, State};
use crate::error::{PuzzleError, SolveError};
use crate::heuristic::Manhattan;
use crate::stat::Stats;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Cooperative cancellation flag, checked once per search iteration.
///
/// Clones share the flag, so a clone can be handed to another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub tie_break: TieBreak,
    /// Expansion cap, `None` is unbounded.
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
    /// Return every expanded state alongside the solution.
    pub report_explored: bool,
    /// Reject parity-unreachable goals before searching.
    pub parity_check: bool,
    pub cancel: Option<CancelToken>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            tie_break: TieBreak::default(),
            max_expansions: None,
            time_limit: None,
            report_explored: false,
            parity_check: true,
            cancel: None,
        }
    }
}

/// What happened to a generated successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    Pushed,
    Decreased,
    /// Already open at an equal or lower cost.
    Kept,
}

/// Hook for following a search as it runs. Every method defaults to a no-op.
pub trait SearchObserver {
    fn on_expand(&mut self, _state: &State, _h_cost: usize) {}

    fn on_discover(&mut self, _state: &State, _h_cost: usize, _discovery: Discovery) {}

    fn on_goal(&mut self, _state: &State) {}
}

/// Default observer, reports through `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_expand(&mut self, state: &State, h_cost: usize) {
        let g_cost = state.g_cost();
        trace!(
            "expand node (h={h_cost}, g={g_cost}, f={})\n{state}",
            g_cost + h_cost
        );
    }

    fn on_discover(&mut self, state: &State, h_cost: usize, discovery: Discovery) {
        trace!(
            "{discovery:?} {:?} g={} h={h_cost}",
            state.last_move(),
            state.g_cost()
        );
    }

    fn on_goal(&mut self, state: &State) {
        debug!("goal reached at g={}", state.g_cost());
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    /// Start to goal inclusive.
    pub states: Vec<State>,
    pub moves: Vec<Direction>,
    pub stats: Stats,
    pub explored: Option<Vec<State>>,
}

impl Solution {
    pub fn cost(&self) -> usize {
        self.moves.len()
    }
}

/// Finds a shortest sequence of slides turning `start` into `goal`.
pub fn solve(
    start: &[Vec<u32>],
    goal: &[Vec<u32>],
    options: &SolveOptions,
) -> Result<Solution, SolveError> {
    solve_with_observer(start, goal, options, &mut TracingObserver)
}

pub fn solve_with_observer(
    start: &[Vec<u32>],
    goal: &[Vec<u32>],
    options: &SolveOptions,
    observer: &mut dyn SearchObserver,
) -> Result<Solution, SolveError> {
    let start = State::create(start)?;
    let goal = State::create(goal)?;
    solve_states(start, &goal, options, observer)
}

pub fn solve_states(
    start: State,
    goal: &State,
    options: &SolveOptions,
    observer: &mut dyn SearchObserver,
) -> Result<Solution, SolveError> {
    if start.side() != goal.side() {
        return Err(PuzzleError::SizeMismatch {
            start: start.side(),
            goal: goal.side(),
        }
        .into());
    }

    if options.parity_check && !is_reachable(&start, goal) {
        debug!("parity check rejected the instance");
        return Err(SolveError::Unsolvable);
    }

    let solve_start_time = Instant::now();
    let heuristic = Manhattan::new(goal);
    let mut explored = ExploredSet::default();
    let mut stats = Stats::default();

    let states = a_star_search(
        start,
        goal,
        &heuristic,
        options,
        observer,
        &mut explored,
        &mut stats,
    )?;
    let moves: Vec<Direction> = states.iter().filter_map(State::last_move).collect();
    debug_assert_eq!(moves.len() + 1, states.len());

    stats.cost = moves.len();
    stats.time_us = solve_start_time.elapsed().as_micros();

    let explored = options.report_explored.then(|| {
        let mut states: Vec<State> = explored.states().cloned().collect();
        states.sort_by_key(|s| (s.g_cost(), s.to_grid()));
        states
    });

    Ok(Solution {
        states,
        moves,
        stats,
        explored,
    })
}
