use crate::common::State;

/// Manhattan distance to a fixed goal.
///
/// The goal coordinates of every tile are computed once, so each estimate
/// is a single pass over the board. The blank does not contribute: one slide
/// moves exactly one numbered tile by one cell, which keeps the estimate
/// admissible and consistent for unit move costs.
#[derive(Debug, Clone)]
pub struct Manhattan {
    side: usize,
    goal_positions: Vec<(usize, usize)>,
}

impl Manhattan {
    pub fn new(goal: &State) -> Self {
        let side = goal.side();
        let mut goal_positions = vec![(0, 0); side * side];
        for (index, &tile) in goal.tiles().iter().enumerate() {
            goal_positions[tile as usize] = (index / side, index % side);
        }

        Manhattan {
            side,
            goal_positions,
        }
    }

    pub fn estimate(&self, state: &State) -> usize {
        debug_assert_eq!(state.side(), self.side);

        state
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                let (goal_row, goal_col) = self.goal_positions[tile as usize];
                (index / self.side).abs_diff(goal_row) + (index % self.side).abs_diff(goal_col)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;
    use std::rc::Rc;

    fn state(grid: &[&[u32]]) -> Rc<State> {
        let grid: Vec<Vec<u32>> = grid.iter().map(|r| r.to_vec()).collect();
        Rc::new(State::create(&grid).unwrap())
    }

    #[test]
    fn test_goal_estimate_is_zero() {
        let goal = state(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(Manhattan::new(&goal).estimate(&goal), 0);
    }

    #[test]
    fn test_classic_instance() {
        let goal = state(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        let start = state(&[&[1, 8, 2], &[4, 0, 5], &[7, 3, 6]]);
        // 8: 2, 2: 1, 5: 1, 3: 3, 6: 1
        assert_eq!(Manhattan::new(&goal).estimate(&start), 8);
    }

    #[test]
    fn test_arbitrary_goal_layout() {
        let goal = state(&[&[0, 1], &[2, 3]]);
        let start = state(&[&[3, 2], &[1, 0]]);
        // 3: 2, 2: 2, 1: 2
        assert_eq!(Manhattan::new(&goal).estimate(&start), 6);
    }

    #[test]
    fn test_single_slide_changes_estimate_by_one() {
        let goal = state(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        let heuristic = Manhattan::new(&goal);
        let start = state(&[&[4, 1, 3], &[7, 2, 5], &[0, 8, 6]]);
        let h = heuristic.estimate(&start);

        for direction in Direction::ALL {
            if let Ok(next) = start.apply_move(direction) {
                assert_eq!(h.abs_diff(heuristic.estimate(&next)), 1);
            }
        }
    }
}
