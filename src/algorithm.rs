mod astar;
mod explored;
mod frontier;
mod parity;

pub(crate) use astar::a_star_search;
pub use explored::ExploredSet;
pub use frontier::{Frontier, FrontierEntry, TieBreak};
pub use parity::is_reachable;

use crate::common::{Direction, State};

use std::rc::Rc;

/// States one slide away from `state`, in `Direction::ALL` order, minus
/// anything already expanded.
pub fn successors(state: &Rc<State>, explored: &ExploredSet) -> Vec<State> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| state.apply_move(direction).ok())
        .filter(|next| !explored.contains(next))
        .collect()
}

/// Follows parent links from `current` back to the root, root first.
fn construct_path(current: &Rc<State>) -> Vec<State> {
    let mut path = vec![State::clone(current)];
    let mut cursor = current.parent();
    while let Some(parent) = cursor {
        cursor = parent.parent();
        path.push(State::clone(&parent));
    }
    path.reverse();
    path
}
