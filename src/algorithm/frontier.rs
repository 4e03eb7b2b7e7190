use crate::common::{OpenKey, State};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// How open-list entries with equal f cost are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Smaller h first, then insertion order.
    #[default]
    SmallerH,
    /// Insertion order only.
    InsertionOrder,
}

#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub state: Rc<State>,
    pub h_cost: usize,
}

impl FrontierEntry {
    pub fn f_cost(&self) -> usize {
        self.state.g_cost() + self.h_cost
    }
}

/// Open list ordered by `f = g + h`.
///
/// The ordered map holds the priority order and the hash index maps each
/// configuration to its current key, so membership and cost updates never
/// scan the list.
#[derive(Debug)]
pub struct Frontier {
    open: BTreeMap<OpenKey, FrontierEntry>,
    index: HashMap<Rc<State>, OpenKey>,
    tie_break: TieBreak,
    next_seq: u64,
}

impl Frontier {
    pub fn new(tie_break: TieBreak) -> Self {
        Frontier {
            open: BTreeMap::new(),
            index: HashMap::new(),
            tie_break,
            next_seq: 0,
        }
    }

    fn key(&self, g_cost: usize, h_cost: usize, seq: u64) -> OpenKey {
        let tie = match self.tie_break {
            TieBreak::SmallerH => h_cost,
            TieBreak::InsertionOrder => 0,
        };
        OpenKey {
            f_cost: g_cost + h_cost,
            tie,
            seq,
        }
    }

    /// Inserts `state` unless an equal configuration is already open.
    pub fn push(&mut self, state: Rc<State>, h_cost: usize) -> bool {
        if self.index.contains_key(&*state) {
            return false;
        }

        let key = self.key(state.g_cost(), h_cost, self.next_seq);
        self.next_seq += 1;
        self.index.insert(Rc::clone(&state), key);
        self.open.insert(key, FrontierEntry { state, h_cost });
        true
    }

    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        let (_, entry) = self.open.pop_first()?;
        self.index.remove(&*entry.state);
        Some(entry)
    }

    /// Replaces the open entry equal to `state` when `state` reaches it more
    /// cheaply. The entry keeps its original insertion sequence.
    pub fn decrease_key(&mut self, state: Rc<State>, h_cost: usize) -> bool {
        let Some(&old_key) = self.index.get(&*state) else {
            return false;
        };
        let recorded = self.open[&old_key].state.g_cost();
        if state.g_cost() >= recorded {
            return false;
        }

        self.open.remove(&old_key);
        // Drop the old key first, `insert` would keep the stale Rc.
        self.index.remove(&*state);

        let key = self.key(state.g_cost(), h_cost, old_key.seq);
        self.index.insert(Rc::clone(&state), key);
        self.open.insert(key, FrontierEntry { state, h_cost });
        true
    }

    pub fn contains(&self, state: &State) -> bool {
        self.index.contains_key(state)
    }

    pub fn g_cost_of(&self, state: &State) -> Option<usize> {
        self.index
            .get(state)
            .map(|key| self.open[key].state.g_cost())
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;

    fn root() -> Rc<State> {
        Rc::new(State::create(&[vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]).unwrap())
    }

    fn child(parent: &Rc<State>, direction: Direction) -> Rc<State> {
        Rc::new(parent.apply_move(direction).unwrap())
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let root = root();
        let mut frontier = Frontier::new(TieBreak::SmallerH);
        assert!(frontier.push(Rc::clone(&root), 4));
        assert!(!frontier.push(Rc::clone(&root), 4));
        assert_eq!(frontier.len(), 1);
        assert!(frontier.contains(&root));
    }

    #[test]
    fn test_pop_min_orders_by_f_then_h_then_insertion() {
        let root = root();
        let up = child(&root, Direction::Up);
        let down = child(&root, Direction::Down);
        let left = child(&root, Direction::Left);

        let mut frontier = Frontier::new(TieBreak::SmallerH);
        frontier.push(Rc::clone(&up), 5); // f = 6
        frontier.push(Rc::clone(&down), 3); // f = 4
        frontier.push(Rc::clone(&left), 3); // f = 4
        frontier.push(Rc::clone(&root), 4); // f = 4, h = 4

        assert_eq!(*frontier.pop_min().unwrap().state, *down);
        assert_eq!(*frontier.pop_min().unwrap().state, *left);
        assert_eq!(*frontier.pop_min().unwrap().state, *root);
        assert_eq!(*frontier.pop_min().unwrap().state, *up);
        assert!(frontier.pop_min().is_none());
        assert!(frontier.is_empty());
        assert!(!frontier.contains(&up));
    }

    #[test]
    fn test_insertion_order_ignores_h() {
        let root = root();
        let up = child(&root, Direction::Up);
        let down = child(&root, Direction::Down);

        let mut frontier = Frontier::new(TieBreak::InsertionOrder);
        frontier.push(Rc::clone(&up), 4); // f = 5
        frontier.push(Rc::clone(&down), 2); // f = 3
        frontier.push(Rc::clone(&root), 5); // f = 5

        assert_eq!(*frontier.pop_min().unwrap().state, *down);
        assert_eq!(*frontier.pop_min().unwrap().state, *up);
        assert_eq!(*frontier.pop_min().unwrap().state, *root);
    }

    #[test]
    fn test_decrease_key_replaces_costlier_entry() {
        let root = root();
        let up = child(&root, Direction::Up);
        let left = child(&root, Direction::Left);
        // Same configuration as `left`, reached in five moves.
        let detour = child(&child(&child(&left, Direction::Right), Direction::Left), Direction::Right);
        let detour = child(&detour, Direction::Left);
        assert_eq!(*detour, *left);
        assert_eq!(detour.g_cost(), 5);

        let mut frontier = Frontier::new(TieBreak::SmallerH);
        frontier.push(Rc::clone(&detour), 2); // f = 7
        frontier.push(Rc::clone(&up), 4); // f = 5
        assert_eq!(frontier.g_cost_of(&left), Some(5));

        assert!(!frontier.decrease_key(Rc::clone(&detour), 2));
        assert!(frontier.decrease_key(Rc::clone(&left), 2)); // f = 3
        assert_eq!(frontier.g_cost_of(&left), Some(1));
        assert_eq!(frontier.len(), 2);

        let first = frontier.pop_min().unwrap();
        assert_eq!(*first.state, *left);
        assert_eq!(first.state.g_cost(), 1);
        assert_eq!(first.f_cost(), 3);
        assert_eq!(first.state.parent().as_deref(), Some(&*root));
    }

    #[test]
    fn test_decrease_key_ignores_absent_state() {
        let root = root();
        let mut frontier = Frontier::new(TieBreak::SmallerH);
        assert!(!frontier.decrease_key(root, 0));
        assert!(frontier.is_empty());
    }
}
