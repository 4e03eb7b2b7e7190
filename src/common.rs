mod node;
mod state;

pub(crate) use node::OpenKey;
pub use state::{Direction, OutOfBounds, State, MAX_SIDE, MIN_SIDE};

/// Grid rows as supplied by callers and scenario files.
pub type Grid = Vec<Vec<u32>>;

/// Goal layout with tiles `1..n²-1` in row-major order and the blank last.
pub fn canonical_goal(side: usize) -> Grid {
    let cells = (side * side) as u32;
    (0..side as u32)
        .map(|row| {
            (0..side as u32)
                .map(|col| (row * side as u32 + col + 1) % cells)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_goal() {
        assert_eq!(canonical_goal(2), vec![vec![1, 2], vec![3, 0]]);
        assert_eq!(
            canonical_goal(3),
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]
        );
    }
}
