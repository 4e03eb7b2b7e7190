use super::{construct_path, successors, ExploredSet, Frontier, FrontierEntry};
use crate::common::State;
use crate::error::SolveError;
use crate::heuristic::Manhattan;
use crate::solver::{CancelToken, Discovery, SearchObserver, SolveOptions};
use crate::stat::Stats;

use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, instrument};

#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, name = "a_star", fields(side = start.side(), tie_break = ?options.tie_break), level = "debug")]
pub(crate) fn a_star_search(
    start: State,
    goal: &State,
    heuristic: &Manhattan,
    options: &SolveOptions,
    observer: &mut dyn SearchObserver,
    explored: &mut ExploredSet,
    stats: &mut Stats,
) -> Result<Vec<State>, SolveError> {
    let search_start_time = Instant::now();
    let mut frontier = Frontier::new(options.tie_break);

    let start_h_cost = heuristic.estimate(&start);
    debug!("start h cost: {start_h_cost}");
    frontier.push(Rc::new(start), start_h_cost);
    stats.max_frontier = 1;

    loop {
        if options.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            debug!("search cancelled");
            return Err(SolveError::Cancelled {
                expanded: stats.expanded_nodes,
            });
        }

        if options
            .time_limit
            .is_some_and(|limit| search_start_time.elapsed() >= limit)
        {
            debug!("time limit reached");
            return Err(SolveError::ResourceExhausted {
                expanded: stats.expanded_nodes,
            });
        }

        let Some(FrontierEntry {
            state: current,
            h_cost,
        }) = frontier.pop_min()
        else {
            debug!("open list exhausted");
            return Err(SolveError::Unsolvable);
        };

        if *current == *goal {
            observer.on_goal(&current);
            return Ok(construct_path(&current));
        }

        if options
            .max_expansions
            .is_some_and(|max| stats.expanded_nodes >= max)
        {
            debug!("expansion limit reached");
            return Err(SolveError::ResourceExhausted {
                expanded: stats.expanded_nodes,
            });
        }

        observer.on_expand(&current, h_cost);
        stats.expanded_nodes += 1;
        explored.insert(Rc::clone(&current));

        for next in successors(&current, explored) {
            stats.generated_nodes += 1;
            let next_h_cost = heuristic.estimate(&next);
            let next = Rc::new(next);

            let discovery = if frontier.push(Rc::clone(&next), next_h_cost) {
                Discovery::Pushed
            } else if frontier.decrease_key(Rc::clone(&next), next_h_cost) {
                stats.decreased_keys += 1;
                Discovery::Decreased
            } else {
                Discovery::Kept
            };
            observer.on_discover(&next, next_h_cost, discovery);
        }

        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }
}
