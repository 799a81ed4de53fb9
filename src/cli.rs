//! Command-line interface for the terminal game

use clap::Parser;

use connect4_minimax::{GameConfig, DEFAULT_COLUMNS, DEFAULT_LOOKAHEAD, DEFAULT_ROWS};

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "connect4")]
#[command(version)]
pub struct Cli {
    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Plies searched below each of the computer's candidate moves
    #[arg(short, long, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: u8,

    /// Terminal color of the human's discs
    #[arg(long, default_value = "red")]
    pub human_color: String,

    /// Terminal color of the computer's discs
    #[arg(long, default_value = "yellow")]
    pub computer_color: String,

    /// Let the computer make the opening move
    #[arg(long)]
    pub computer_first: bool,
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            columns: self.columns,
            lookahead: self.lookahead,
            human_color: self.human_color,
            computer_color: self.computer_color,
            computer_first: self.computer_first,
        }
    }
}
