use crate::common::State;

/// Whether `goal` can be reached from `start` by sliding the blank.
///
/// Every slide is one transposition of cells and moves the blank one step,
/// so the parity of the cell permutation between the two boards must match
/// the parity of the blank's Manhattan displacement. For square boards that
/// condition is also sufficient.
pub fn is_reachable(start: &State, goal: &State) -> bool {
    if start.side() != goal.side() {
        return false;
    }

    let cells = start.tiles().len();
    let mut goal_index = vec![0; cells];
    for (index, &tile) in goal.tiles().iter().enumerate() {
        goal_index[tile as usize] = index;
    }
    let permutation: Vec<usize> = start
        .tiles()
        .iter()
        .map(|&tile| goal_index[tile as usize])
        .collect();

    let mut visited = vec![false; cells];
    let mut cycles = 0;
    for begin in 0..cells {
        if visited[begin] {
            continue;
        }
        cycles += 1;
        let mut cursor = begin;
        while !visited[cursor] {
            visited[cursor] = true;
            cursor = permutation[cursor];
        }
    }
    let permutation_parity = (cells - cycles) % 2;

    let (start_row, start_col) = start.blank_position();
    let (goal_row, goal_col) = goal.blank_position();
    let blank_parity = (start_row.abs_diff(goal_row) + start_col.abs_diff(goal_col)) % 2;

    permutation_parity == blank_parity
}
