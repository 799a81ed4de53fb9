use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, Print, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, GameConfig, Move, Player};

/// Terminal colors of the two players' discs
pub struct Palette {
    human: Color,
    computer: Color,
}

impl Palette {
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            human: parse_color(&config.human_color)?,
            computer: parse_color(&config.computer_color)?,
        })
    }

    fn color(&self, player: Player) -> Color {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }
}

fn parse_color(name: &str) -> Result<Color> {
    let color = match name.trim().to_lowercase().as_str() {
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "black" => Color::Black,
        // the board background
        "dark_blue" => return Err(anyhow!("'{}' is reserved for empty tiles", name)),
        _ => return Err(anyhow!("unknown color '{}'", name)),
    };
    Ok(color)
}

/// Draws the board with one-indexed column numbers above it,
/// underlining the most recent move
pub fn display(board: &Board, palette: &Palette, last_move: Option<Move>) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.cols()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(Print(cols + "\n"))?;

    for (row, cells) in board.cells().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let mut tile = style("O")
                .attribute(Attribute::Bold)
                .on(Color::DarkBlue)
                .with(cell.color.map_or(Color::DarkBlue, |p| palette.color(p)));
            if last_move == Some(Move::new(row, col)) {
                tile = tile.attribute(Attribute::Underlined);
            }
            stdout.queue(PrintStyledContent(tile))?;
        }
        stdout.queue(Print("\n"))?;
    }
    stdout.flush()?;
    Ok(())
}
