//! A gravity-board 'Connect 4' game with a minimax computer opponent
//!
//! The computer picks its moves with a depth-limited minimax search over a
//! heuristic board evaluator. The board is a single mutable grid that the search
//! explores in place, restoring every speculative move before it returns.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{GameConfig, GameSession, Transition};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut session = GameSession::new(GameConfig {
//!     lookahead: 2,
//!     ..GameConfig::default()
//! })?;
//!
//! // the human drops a disc into the middle column (zero-indexed)
//! let transition = session.drop_in_column(3)?;
//! assert_eq!(transition, Transition::ComputerTurnPending);
//!
//! let (computer_move, _) = session.computer_move()?;
//! assert!(session.board().cell(computer_move.row, computer_move.col).is_occupied());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod win;

pub mod heuristic;

pub mod search;

pub mod session;

pub mod schedule;


pub use board::{Board, Cell, Move, Player, Speculation};
pub use error::GameError;
pub use search::Searcher;
pub use session::{GameConfig, GameSession, Transition};
pub use win::GameState;

/// The default width of the game board in tiles
pub const DEFAULT_COLUMNS: usize = 7;

/// The default height of the game board in tiles
pub const DEFAULT_ROWS: usize = 6;

/// The number of aligned tiles needed to win
pub const RUN_LENGTH: usize = 4;

/// The default number of plies searched below the computer's candidate reply
/// before falling back to the static heuristic
pub const DEFAULT_LOOKAHEAD: u8 = 4;

// a default board must be able to hold a winning run in every direction
const_assert!(DEFAULT_COLUMNS >= RUN_LENGTH);
const_assert!(DEFAULT_ROWS >= RUN_LENGTH);
