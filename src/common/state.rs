use crate::error::PuzzleError;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// Smallest and largest supported board side. Labels must fit in one byte.
pub const MIN_SIDE: usize = 2;
pub const MAX_SIDE: usize = 16;

/// Direction the blank travels when a move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Emission order of the move generator.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{s}")
    }
}

/// The blank's neighbor in the requested direction is off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds;

/// Immutable puzzle configuration.
///
/// Tiles are packed row-major, one byte per cell. Equality and hashing only
/// look at the tiles, never at `g_cost` or `parent`.
#[derive(Clone)]
pub struct State {
    tiles: Box<[u8]>,
    side: usize,
    blank: (usize, usize),
    g_cost: usize,
    last_move: Option<Direction>,
    parent: Option<Weak<State>>,
}

impl State {
    pub fn create(grid: &[Vec<u32>]) -> Result<Self, PuzzleError> {
        let side = grid.len();
        if side == 0 {
            return Err(PuzzleError::Empty);
        }
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(PuzzleError::NotSquare {
                row,
                len: cells.len(),
                side,
            });
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(PuzzleError::UnsupportedSize { side });
        }

        let cells = side * side;
        let mut seen = vec![false; cells];
        let mut tiles = Vec::with_capacity(cells);
        let mut blank = (0, 0);

        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let index = value as usize;
                if index >= cells {
                    return Err(PuzzleError::TileOutOfRange { value, max: cells - 1 });
                }
                if seen[index] {
                    return Err(PuzzleError::DuplicateTile { value });
                }
                seen[index] = true;
                if value == 0 {
                    blank = (row, col);
                }
                tiles.push(value as u8);
            }
        }

        Ok(State {
            tiles: tiles.into_boxed_slice(),
            side,
            blank,
            g_cost: 0,
            last_move: None,
            parent: None,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn blank_position(&self) -> (usize, usize) {
        self.blank
    }

    pub fn g_cost(&self) -> usize {
        self.g_cost
    }

    /// Move that produced this state from its parent.
    pub fn last_move(&self) -> Option<Direction> {
        self.last_move
    }

    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.side + col]
    }

    pub(crate) fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Parent on the search tree, if it is still alive.
    pub fn parent(&self) -> Option<Rc<State>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        self.tiles
            .chunks(self.side)
            .map(|row| row.iter().map(|&t| t as u32).collect())
            .collect()
    }

    /// Slides the blank one step, producing a child one move further from the start.
    pub fn apply_move(self: &Rc<Self>, direction: Direction) -> Result<State, OutOfBounds> {
        let (dr, dc) = direction.as_offset();
        let new_row = self.blank.0 as isize + dr;
        let new_col = self.blank.1 as isize + dc;
        let side = self.side as isize;

        if new_row < 0 || new_row >= side || new_col < 0 || new_col >= side {
            return Err(OutOfBounds);
        }

        let (new_row, new_col) = (new_row as usize, new_col as usize);
        let mut tiles = self.tiles.clone();
        tiles.swap(
            self.blank.0 * self.side + self.blank.1,
            new_row * self.side + new_col,
        );

        Ok(State {
            tiles,
            side: self.side,
            blank: (new_row, new_col),
            g_cost: self.g_cost + 1,
            last_move: Some(direction),
            parent: Some(Rc::downgrade(self)),
        })
    }

    /// Direction that turns `self` into `next`, if they are one slide apart.
    pub fn move_towards(&self, next: &State) -> Option<Direction> {
        if self.side != next.side {
            return None;
        }
        let direction = Direction::ALL.into_iter().find(|d| {
            let (dr, dc) = d.as_offset();
            self.blank.0 as isize + dr == next.blank.0 as isize
                && self.blank.1 as isize + dc == next.blank.1 as isize
        })?;

        // Only the two swapped cells may differ.
        let from = self.blank.0 * self.side + self.blank.1;
        let to = next.blank.0 * self.side + next.blank.1;
        let legal = self.tiles.iter().zip(next.tiles.iter()).enumerate().all(|(i, (a, b))| {
            if i == from {
                *b == self.tiles[to]
            } else if i == to {
                *b == 0
            } else {
                a == b
            }
        });
        legal.then_some(direction)
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.tiles == other.tiles
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("tiles", &self.tiles)
            .field("blank", &self.blank)
            .field("g_cost", &self.g_cost)
            .field("last_move", &self.last_move)
            .finish()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.side * self.side - 1).to_string().len();
        for row in self.tiles.chunks(self.side) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == 0 {
                        format!("{:>width$}", "_")
                    } else {
                        format!("{t:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
