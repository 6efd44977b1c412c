use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, ParseError};
use crate::input::parse_board;
use crate::search::SearchState;

/// Direction a tile slides into the blank.
///
/// `Up` slides the tile below the blank upwards, so the blank itself moves
/// one row down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Every move, in the order neighbors are generated: the blank travels
    /// up, down, left, then right.
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

    /// Displacement of the blank as `(row, col)`.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// Lowercase direction name; honours width and alignment flags.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Move::Up => "up",
            Move::Left => "left",
            Move::Down => "down",
            Move::Right => "right",
        })
    }
}

/// An immutable n×n sliding-tile configuration.
///
/// Tiles are stored row-major; `0` is the blank. The goal places `1..n²-1` in
/// row-major order with the blank in the bottom-right cell. The Manhattan
/// distance is computed once when the board is built, since every priority
/// comparison in the search reads it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    tiles: Vec<u32>,
    blank: usize,
    manhattan: u32,
}

impl Board {
    /// Builds a board from rows of tiles, copying them.
    ///
    /// Rejects empty grids, ragged or non-square rows, and anything that is
    /// not a permutation of `0..n²`.
    pub fn new(grid: &[Vec<u32>]) -> Result<Self, BoardError> {
        let dimension = grid.len();
        if dimension == 0 {
            return Err(BoardError::Empty);
        }

        let mut tiles = Vec::with_capacity(dimension * dimension);
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::from_tiles(dimension, tiles)
    }

    /// Builds a board from row-major tiles.
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        let cells = dimension
            .checked_mul(dimension)
            .ok_or(BoardError::DimensionTooLarge(dimension))?;
        if tiles.len() != cells {
            return Err(BoardError::TileCount {
                dimension,
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        for (index, &value) in tiles.iter().enumerate() {
            let slot = value as usize;
            if slot >= cells {
                return Err(BoardError::TileOutOfRange {
                    value,
                    row: index / dimension,
                    col: index % dimension,
                    dimension,
                });
            }
            if seen[slot] {
                return Err(BoardError::DuplicateTile { value });
            }
            seen[slot] = true;
        }

        Ok(Self::from_permutation(dimension, tiles))
    }

    /// The solved board of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    pub fn goal(dimension: usize) -> Self {
        assert!(dimension > 0, "board dimension must be positive");
        let cells = dimension * dimension;
        let tiles = (0..cells).map(|index| goal_tile(index, cells)).collect();
        Self::from_permutation(dimension, tiles)
    }

    // Callers guarantee `tiles` is a permutation of 0..dimension².
    fn from_permutation(dimension: usize, tiles: Vec<u32>) -> Self {
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        let manhattan = tiles
            .iter()
            .enumerate()
            .map(|(index, &value)| tile_distance(value, index, dimension))
            .sum();

        Self {
            dimension,
            tiles,
            blank,
            manhattan,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.dimension + col]
    }

    /// Row-major view of every cell, blank included.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.dimension)
    }

    /// Position of the blank as `(row, col)`.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.dimension, self.blank % self.dimension)
    }

    /// Number of tiles, blank excluded, that are not in their goal cell.
    pub fn hamming(&self) -> u32 {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(index, &value)| value != 0 && value != goal_tile(index, cells))
            .count() as u32
    }

    /// Sum of the row and column displacement of every non-blank tile.
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &value)| value == goal_tile(index, cells))
    }

    /// A board with two adjacent tiles of a blank-free row swapped.
    ///
    /// Exactly one of a board and its twin can reach the goal. The swap uses
    /// the first two columns of the top row, or of the second row when the
    /// blank sits in the top row. A 1×1 board has no such pair and yields
    /// `None`.
    pub fn twin(&self) -> Option<Self> {
        if self.dimension < 2 {
            return None;
        }
        let (blank_row, _) = self.blank();
        let row = if blank_row != 0 { 0 } else { 1 };
        let first = row * self.dimension;

        let mut tiles = self.tiles.clone();
        tiles.swap(first, first + 1);
        Some(Self::from_permutation(self.dimension, tiles))
    }

    /// Slides one tile into the blank, or `None` if no tile lies on that side.
    pub fn slide(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.dimension as isize;
        if new_row < 0 || new_row >= size || new_col < 0 || new_col >= size {
            return None;
        }

        let target = new_row as usize * self.dimension + new_col as usize;
        let value = self.tiles[target];

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        // Only the moved tile changes its distance.
        let manhattan = self.manhattan - tile_distance(value, target, self.dimension)
            + tile_distance(value, self.blank, self.dimension);

        Some(Self {
            dimension: self.dimension,
            tiles,
            blank: target,
            manhattan,
        })
    }

    /// Every board one slide away, each paired with the slide producing it.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |movement| self.slide(movement).map(|next| (movement, next)))
    }

    /// Every board one slide away: two in a corner, three along an edge,
    /// four in the interior.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> + '_ {
        self.successors().map(|(_, next)| next)
    }

    /// The slide that turns `self` into `other`, if they are one move apart.
    pub fn move_to(&self, other: &Board) -> Option<Move> {
        if other.dimension != self.dimension {
            return None;
        }
        Move::ALL
            .into_iter()
            .find(|&movement| self.slide(movement).as_ref() == Some(other))
    }

    /// Random walk of `steps` slides from the goal, never undoing the
    /// previous slide. The result is solvable in at most `steps` moves.
    pub fn scramble<R: Rng + ?Sized>(dimension: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(dimension);
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<(Move, Board)> = board
                .successors()
                .filter(|(movement, _)| last != Some(movement.opposite()))
                .collect();
            let Some((movement, next)) = candidates.choose(rng).cloned() else {
                break;
            };
            last = Some(movement);
            board = next;
        }

        board
    }
}

fn goal_tile(index: usize, cells: usize) -> u32 {
    if index + 1 == cells {
        0
    } else {
        index as u32 + 1
    }
}

fn tile_distance(value: u32, index: usize, dimension: usize) -> u32 {
    if value == 0 {
        return 0;
    }
    let goal = value as usize - 1;
    let (row, col) = (index / dimension, index % dimension);
    let (goal_row, goal_col) = (goal / dimension, goal % dimension);
    (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
}

impl SearchState for Board {
    fn heuristic(&self) -> u32 {
        self.manhattan
    }

    fn is_solved(&self) -> bool {
        self.is_goal()
    }

    fn expand(&self) -> impl Iterator<Item = Self> + '_ {
        self.neighbors()
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        writeln!(f, "{}", self.dimension)?;
        for row in self.rows() {
            for &val in row {
                write!(f, " {:>width$}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
