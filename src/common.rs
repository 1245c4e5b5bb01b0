//! Common types for tic-tac-toe: cell values and board errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Unclaimed cell. Never placeable.
    #[default]
    Empty,
    /// First player's marker.
    X,
    /// Second player's marker.
    O,
}

impl Cell {
    /// The two placeable markers, in turn order.
    pub const PLAYERS: [Cell; 2] = [Cell::X, Cell::O];

    /// Returns true for `X` and `O`.
    pub fn is_player(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// The other player's marker. `Empty` maps to itself.
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Character used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Raw marker codes: `0` empty, `1` X, `2` O.
impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::X),
            2 => Ok(Cell::O),
            _ => Err(BoardError::InvalidPlayer),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside `[0, 2]`.
    OutOfRange { row: isize, col: isize },
    /// Marker is not one of the two players.
    InvalidPlayer,
    /// Target cell already holds a marker.
    CellOccupied { row: usize, col: usize },
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidPlayer => write!(f, "Marker is not a valid player"),
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
