//! Game board state, stored as one occupancy `BitBoard` per player.

use crate::bitboard::{BitBoard, SetBits};
use crate::common::{BoardError, Cell};
use crate::config::{BOARD_SIZE, WIN_LINES};
use crate::game::GameStatus;
use alloc::string::{String, ToString};
use core::fmt;
use log::{debug, trace};
use rand::Rng;

type BB = BitBoard<u16, BOARD_SIZE>;

/// A 3×3 tic-tac-toe board.
///
/// A cell is never set in both masks: `place` rejects occupied cells and the
/// constructors assign each cell at most one marker.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Create a board with every cell drawn uniformly from `Empty`, `X` and
    /// `O`. The result is usually not a legal game position.
    pub fn randomized<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let cell = match rng.random_range(0..3u8) {
                    1 => Cell::X,
                    2 => Cell::O,
                    _ => Cell::Empty,
                };
                board.write(r, c, cell);
            }
        }
        trace!("randomized board {:?}", board);
        board
    }

    /// Empty board, or a randomized one when `randomize` is set.
    pub fn with_randomize<R: Rng + ?Sized>(randomize: bool, rng: &mut R) -> Self {
        if randomize {
            Board::randomized(rng)
        } else {
            Board::new()
        }
    }

    /// Build a board from an explicit grid, indexed `rows[row][col]`.
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                board.write(r, c, cell);
            }
        }
        board
    }

    /// Snapshot of the grid, indexed `[row][col]`.
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| core::array::from_fn(|c| self.cell(r, c)))
    }

    /// Marker at (row, col).
    pub fn position(&self, row: isize, col: isize) -> Result<Cell, BoardError> {
        let (r, c) = checked_coords(row, col)?;
        Ok(self.cell(r, c))
    }

    /// Put `player`'s marker at (row, col).
    ///
    /// Turn order is not enforced here; see [`Board::is_valid_board`].
    pub fn place(&mut self, row: isize, col: isize, player: Cell) -> Result<(), BoardError> {
        let (r, c) = checked_coords(row, col)
            .inspect_err(|e| debug!("rejected placement: {}", e))?;
        let occupied = (self.x | self.o).get(r, c)?;
        let mask = match player {
            Cell::X => &mut self.x,
            Cell::O => &mut self.o,
            Cell::Empty => {
                debug!("rejected placement of an empty marker at ({}, {})", r, c);
                return Err(BoardError::InvalidPlayer);
            }
        };
        if occupied {
            debug!("rejected placement of {} at occupied ({}, {})", player, r, c);
            return Err(BoardError::CellOccupied { row: r, col: c });
        }
        mask.set(r, c)?;
        trace!("placed {} at ({}, {})", player, r, c);
        Ok(())
    }

    /// Number of `X` and `O` markers on the board.
    pub fn counts(&self) -> (usize, usize) {
        (self.x.count_ones(), self.o.count_ones())
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        (self.x | self.o).is_full()
    }

    /// Unclaimed cells in row-major order.
    pub fn empty_positions(&self) -> SetBits<u16, BOARD_SIZE> {
        (!(self.x | self.o)).iter_set_bits()
    }

    /// Returns true if this board could be a snapshot of a real game.
    ///
    /// `X` moves first, so it holds as many markers as `O` or exactly one
    /// more, and at most one player may have completed a line.
    pub fn is_valid_board(&self) -> bool {
        let (xs, os) = self.counts();
        let balanced = xs == os || xs == os + 1;
        let single_winner = !(has_line(&self.x) && has_line(&self.o));
        balanced && single_winner
    }

    /// The player owning the first complete line found, scanning rows, then
    /// columns, then both diagonals.
    ///
    /// A board where both players have a line returns whichever comes first;
    /// call [`Board::is_valid_board`] to rule that out.
    pub fn winning_player(&self) -> Option<Cell> {
        WIN_LINES.iter().find_map(|line| {
            if self.x.covers(line) {
                Some(Cell::X)
            } else if self.o.covers(line) {
                Some(Cell::O)
            } else {
                None
            }
        })
    }

    /// Winner first, then a full board counts as a draw.
    pub fn status(&self) -> GameStatus {
        match self.winning_player() {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Framed, row-by-row text picture of the board.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn cell(&self, r: usize, c: usize) -> Cell {
        debug_assert!(r < BOARD_SIZE && c < BOARD_SIZE, "read off the board: ({}, {})", r, c);
        match (self.x.get(r, c), self.o.get(r, c)) {
            (Ok(true), _) => Cell::X,
            (_, Ok(true)) => Cell::O,
            _ => Cell::Empty,
        }
    }

    // Only called with in-range coordinates on a cell not yet written.
    fn write(&mut self, r: usize, c: usize, cell: Cell) {
        debug_assert!(r < BOARD_SIZE && c < BOARD_SIZE, "write off the board: ({}, {})", r, c);
        let written = match cell {
            Cell::X => self.x.set(r, c),
            Cell::O => self.o.set(r, c),
            Cell::Empty => Ok(()),
        };
        if let Err(e) = written {
            debug!("dropped write of {} at ({}, {}): {}", cell, r, c, e);
        }
    }
}

fn has_line(marks: &BB) -> bool {
    WIN_LINES.iter().any(|line| marks.covers(line))
}

fn checked_coords(row: isize, col: isize) -> Result<(usize, usize), BoardError> {
    let in_range = |v: isize| usize::try_from(v).ok().filter(|&v| v < BOARD_SIZE);
    match (in_range(row), in_range(col)) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(BoardError::OutOfRange { row, col }),
    }
}

const BORDER: &str = "+-------+";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BORDER)?;
        for row in self.rows() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "{}", BORDER)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board(")?;
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        f.write_str(")")
    }
}
