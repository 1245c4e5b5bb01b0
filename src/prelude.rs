//! Commonly used types and functions for ease of import.

pub use crate::{play_random_game, play_scripted_game, Board, BoardError, Cell, GameStatus};

#[cfg(feature = "std")]
pub use crate::init_logging;
