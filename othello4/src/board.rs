//! Board-level Othello logic: cell occupancy, captures, and move application.
//!
//! The board is a plain 4x4 array of [`Cell`]s and is [`Copy`], so every copy
//! is independent. Search code relies on this to explore hypothetical moves
//! without touching the position being played.

use crate::game::Player;
use crate::location::Location;
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error, From, Into};
use std::fmt;
use std::ops::Deref;

/// The eight compass directions as (row, column) steps.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Longest straight line leaving any cell.
const MAX_RUN: usize = EDGE_LENGTH - 1;

/// Opponent pieces bracketed along one direction.
type Run = ArrayVec<Location, MAX_RUN>;

/// The contents of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Black) => 'B',
            Cell::Occupied(Player::White) => 'W',
        }
    }
}

/// A 4x4 Othello position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// Legal moves out of a position, in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, From, Into)]
pub struct MoveList(ArrayVec<Location, NUM_SPACES>);

/// Raised when a move that fails the capture rule is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid move {} for {}", location, player)]
pub struct InvalidMove {
    pub location: Location,
    pub player: Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 16 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
    #[display(fmt = "unrecognized cell {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: White on the main diagonal of the center, Black on the other.
    pub const fn new() -> Self {
        const E: Cell = Cell::Empty;
        const B: Cell = Cell::Occupied(Player::Black);
        const W: Cell = Cell::Occupied(Player::White);

        Self {
            cells: [[E, E, E, E], [E, W, B, E], [E, B, W, E], [E, E, E, E]],
        }
    }

    /// Build a board from an explicit grid of cells.
    pub const fn from_cells(cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Get an independent copy of this board.
    #[inline]
    pub fn duplicate(&self) -> Self {
        *self
    }

    /// Walk away from `origin` along `direction`, collecting the opponent pieces
    /// `player` would capture there. Empty unless the run of opponent pieces
    /// ends on one of `player`'s own pieces.
    fn captures_in_direction(
        &self,
        origin: Location,
        direction: (i32, i32),
        player: Player,
    ) -> Run {
        let mut run = Run::new();
        let mut cursor = origin.offset(direction);

        while let Some(loc) = cursor {
            match self.cell(loc) {
                Cell::Occupied(owner) if owner == player => return run,
                Cell::Occupied(_) => run.push(loc),
                Cell::Empty => break,
            }
            cursor = loc.offset(direction);
        }

        Run::new()
    }

    /// Returns whether `player` may place a piece at `loc`.
    pub fn is_legal_move(&self, loc: Location, player: Player) -> bool {
        self.cell(loc) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&direction| !self.captures_in_direction(loc, direction, player).is_empty())
    }

    /// Like [`Board::is_legal_move`], but accepts any coordinates.
    /// Off-board coordinates are never legal.
    pub fn is_legal_coords(&self, row: i32, col: i32, player: Player) -> bool {
        Location::from_signed(row, col).map_or(false, |loc| self.is_legal_move(loc, player))
    }

    /// Get every legal move for `player`, scanning in row-major order.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        MoveList(
            Location::all()
                .filter(|&loc| self.is_legal_move(loc, player))
                .collect(),
        )
    }

    /// Place a piece for `player` at `loc` and flip every captured piece.
    /// Returns the number of pieces flipped. On error the board is unchanged.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Result<u8, InvalidMove> {
        if !self.is_legal_move(loc, player) {
            return Err(InvalidMove {
                location: loc,
                player,
            });
        }

        // Rays from one origin never overlap, so scanning them all before
        // writing gives the same result as flipping one direction at a time.
        let runs: ArrayVec<Run, 8> = DIRECTIONS
            .iter()
            .map(|&direction| self.captures_in_direction(loc, direction, player))
            .collect();

        self.set(loc, Cell::Occupied(player));
        let mut flipped = 0;
        for captured in runs.iter().flatten() {
            self.set(*captured, Cell::Occupied(player));
            flipped += 1;
        }

        Ok(flipped)
    }

    /// Count the cells occupied by `player`.
    pub fn count_pieces(&self, player: Player) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count() as u8
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Get the same position with the colors of every piece exchanged.
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flatten() {
            if let Cell::Occupied(owner) = *cell {
                *cell = Cell::Occupied(!owner);
            }
        }
        swapped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().flatten().map(|cell| cell.to_char()), f)
    }
}

/// Parse 16 cells in row-major order, ignoring whitespace.
/// Empty cells are `.` or `-`, Black is `B`, `X` or `#`, White is `W` or `O`.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                '.' | '-' => Ok(Cell::Empty),
                'B' | 'X' | '#' => Ok(Cell::Occupied(Player::Black)),
                'W' | 'O' => Ok(Cell::Occupied(Player::White)),
                _ => Err(ParseBoardError::InvalidCell(c)),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Self::from_cells([[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH]);
        for (loc, cell) in Location::all().zip(cells) {
            board.set(loc, cell);
        }
        Ok(board)
    }
}

impl MoveList {
    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }
}

impl Deref for MoveList {
    type Target = [Location];

    fn deref(&self) -> &[Location] {
        &self.0
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = arrayvec::IntoIter<Location, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use itertools::Itertools;

        write!(f, "[{}]", self.iter().join(", "))
    }
}
