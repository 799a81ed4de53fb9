//! Turn management for a single human vs computer game

use tracing::{info, instrument, warn};

use crate::{
    board::{Board, Move, Player},
    error::GameError,
    search::Searcher,
    win::{self, GameState},
    DEFAULT_COLUMNS, DEFAULT_LOOKAHEAD, DEFAULT_ROWS, RUN_LENGTH,
};

/// Boards larger than this are rejected
pub const MAX_CELLS: usize = 400;

/// Lookahead depths above this are rejected, as the search is exhaustive
pub const MAX_LOOKAHEAD: u8 = 8;

/// Settings fixed for the lifetime of a session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    /// Plies searched below each of the computer's candidate replies
    pub lookahead: u8,
    pub human_color: String,
    pub computer_color: String,
    pub computer_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            lookahead: DEFAULT_LOOKAHEAD,
            human_color: "red".to_string(),
            computer_color: "yellow".to_string(),
            computer_first: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::InvalidConfig(format!(
                "board dimensions must be non-zero, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self
            .rows
            .checked_mul(self.columns)
            .map_or(true, |cells| cells > MAX_CELLS)
        {
            return Err(GameError::InvalidConfig(format!(
                "board of {}x{} exceeds {} cells",
                self.rows, self.columns, MAX_CELLS
            )));
        }
        if self.rows < RUN_LENGTH && self.columns < RUN_LENGTH {
            return Err(GameError::InvalidConfig(format!(
                "a {}x{} board cannot hold a run of {}",
                self.rows, self.columns, RUN_LENGTH
            )));
        }
        if self.lookahead > MAX_LOOKAHEAD {
            return Err(GameError::InvalidConfig(format!(
                "lookahead {} exceeds the maximum of {}",
                self.lookahead, MAX_LOOKAHEAD
            )));
        }
        if self.human_color.trim().is_empty() || self.computer_color.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "player colors must not be empty".to_string(),
            ));
        }
        if self.human_color.eq_ignore_ascii_case(&self.computer_color) {
            return Err(GameError::InvalidConfig(format!(
                "both players use the color '{}'",
                self.human_color
            )));
        }
        Ok(())
    }
}

/// What the caller has to do after a move has been applied
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Transition {
    /// Waiting for the human's next command
    HumanTurn,
    /// The computer is to move: schedule exactly one `computer_move` call
    ComputerTurnPending,
    GameOver(GameState),
}

/// A single game owning its board, turn and result
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    turn: Player,
    state: GameState,
    history: Vec<(Move, Player)>,
    searcher: Searcher,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let turn = if config.computer_first {
            Player::Computer
        } else {
            Player::Human
        };
        info!(
            rows = config.rows,
            columns = config.columns,
            lookahead = config.lookahead,
            first = ?turn,
            "new game"
        );
        Ok(Self {
            board: Board::new(config.rows, config.columns),
            searcher: Searcher::new(config.lookahead),
            turn,
            state: GameState::Playing,
            history: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Every move applied so far, in order
    pub fn history(&self) -> &[(Move, Player)] {
        &self.history
    }

    /// Positions visited by the computer's last search
    pub fn last_search_nodes(&self) -> usize {
        self.searcher.node_count
    }

    pub fn computer_pending(&self) -> bool {
        !self.state.is_over() && self.turn == Player::Computer
    }

    fn transition(&self) -> Transition {
        if self.state.is_over() {
            Transition::GameOver(self.state)
        } else if self.turn == Player::Computer {
            Transition::ComputerTurnPending
        } else {
            Transition::HumanTurn
        }
    }

    /// Plays a move for the player whose turn it is
    ///
    /// The game state is recomputed afterwards, and the turn passes to the
    /// other player unless the game is now decided.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Transition, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }
        if player != self.turn {
            return Err(GameError::OutOfTurn {
                expected: self.turn,
            });
        }

        self.board.place(row, col, player)?;
        self.history.push((Move::new(row, col), player));
        info!(?player, row, col, "move applied");

        self.state = win::evaluate(&self.board);
        if self.state.is_over() {
            info!(state = ?self.state, moves = self.history.len(), "game over");
        } else {
            self.turn = player.other();
        }

        Ok(self.transition())
    }

    /// Plays a move for the human
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Transition, GameError> {
        self.apply_move(row, col, Player::Human).map_err(|err| {
            warn!(row, col, error = %err, "move rejected");
            err
        })
    }

    /// Plays the human's move into the legal tile of a column
    pub fn drop_in_column(&mut self, col: usize) -> Result<Transition, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }
        match self.board.legal_row(col) {
            Some(row) => self.attempt_move(row, col),
            None => {
                warn!(col, "column full or out of range");
                Err(GameError::ColumnFull { col })
            }
        }
    }

    /// Searches for and plays the computer's move
    ///
    /// Blocks until the full search tree has been explored.
    #[instrument(skip(self), fields(lookahead = self.config.lookahead))]
    pub fn computer_move(&mut self) -> Result<(Move, Transition), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }
        if self.turn != Player::Computer {
            return Err(GameError::OutOfTurn {
                expected: self.turn,
            });
        }

        let (chosen, value) = self
            .searcher
            .best_move(&mut self.board)
            .ok_or(GameError::GameOver(GameState::Tie))?;
        info!(
            row = chosen.row,
            col = chosen.col,
            value,
            nodes = self.searcher.node_count,
            "computer move chosen"
        );

        let transition = self.apply_move(chosen.row, chosen.col, Player::Computer)?;
        Ok((chosen, transition))
    }
}
