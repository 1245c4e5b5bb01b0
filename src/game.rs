//! Game drivers that exercise a [`Board`] through its public operations.

use crate::{
    board::Board,
    common::{BoardError, Cell},
    config::{BOARD_SIZE, NUM_CELLS},
};
use log::debug;
use rand::{seq::SliceRandom, Rng};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// No line completed and empty cells remain.
    InProgress,
    /// The carried player completed a line.
    Won(Cell),
    /// Board full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a winner or no moves remain.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Play a game with both players picking uniformly among free cells.
///
/// All nine coordinates are shuffled once and played in that order, `X`
/// first, until someone completes a line or the board fills up.
pub fn play_random_game<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut positions: [(usize, usize); NUM_CELLS] =
        core::array::from_fn(|i| (i / BOARD_SIZE, i % BOARD_SIZE));
    positions.shuffle(rng);

    let mut board = Board::new();
    let mut player = Cell::X;
    for (r, c) in positions {
        if board.winning_player().is_some() {
            break;
        }
        // Each shuffled coordinate is in range and visited once.
        if let Err(e) = board.place(r as isize, c as isize, player) {
            debug!("random game skipped ({}, {}): {}", r, c, e);
            continue;
        }
        player = player.opponent();
    }
    debug!("random game finished: {:?}", board.status());
    board
}

/// Play `moves` in order, alternating from `X`.
///
/// Stops as soon as a player completes a line; any remaining moves are
/// ignored. The first rejected placement is returned as the error.
pub fn play_scripted_game(moves: &[(isize, isize)]) -> Result<Board, BoardError> {
    let mut board = Board::new();
    let mut player = Cell::X;
    for (i, &(r, c)) in moves.iter().enumerate() {
        if board.winning_player().is_some() {
            debug!("scripted game won after {} moves, ignoring the rest", i);
            break;
        }
        board.place(r, c, player)?;
        player = player.opponent();
    }
    Ok(board)
}
