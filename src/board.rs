use anyhow::{anyhow, Result};

use std::ops::{Deref, DerefMut};

use crate::error::GameError;

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The player moving after this one
    pub fn other(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A single board tile
///
/// `legal` marks the one tile per column that may be filled right now.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cell {
    pub color: Option<Player>,
    pub legal: bool,
}

impl Cell {
    const EMPTY: Cell = Cell {
        color: None,
        legal: false,
    };

    pub fn is_occupied(&self) -> bool {
        self.color.is_some()
    }
}

/// A tile position, row 0 being the top of the board
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A fixed size grid obeying the gravity rule
///
/// Only the lowest empty tile of each column is legal. Filling a tile hands
/// legality to the tile directly above it, and `undo` hands it back, so
/// speculative moves must be undone in exact reverse order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates an empty board with only the bottom row legal
    ///
    /// # Panics
    /// If either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        let mut cells = vec![Cell::EMPTY; rows * cols];
        for cell in cells[(rows - 1) * cols..].iter_mut() {
            cell.legal = true;
        }
        Self { cells, rows, cols }
    }

    /// Builds a board from a string of one-indexed column numbers,
    /// alternating players with the human moving first
    ///
    /// Wins are not checked, so this can build any position reachable
    /// by gravity alone.
    pub fn from_moves<S: AsRef<str>>(rows: usize, cols: usize, moves: S) -> Result<Self> {
        let mut board = Self::new(rows, cols);
        let mut player = Player::Human;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= cols => {
                    let column = column - 1;
                    let row = board
                        .legal_row(column)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column + 1))?;
                    board.place(row, column, player)?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// # Panics
    /// If the position is outside the board
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked cell lookup
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Read-only view of every cell, row by row from the top
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "position ({}, {}) is outside the board",
            row,
            col
        );
        row * self.cols + col
    }

    /// Fills a legal tile and makes the tile above it legal
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), GameError> {
        match self.get(row, col) {
            Some(cell) if cell.legal => {}
            _ => return Err(GameError::IllegalMove { row, col }),
        }
        let idx = self.index(row, col);
        self.cells[idx] = Cell {
            color: Some(player),
            legal: false,
        };
        if row > 0 {
            self.cells[idx - self.cols].legal = true;
        }
        Ok(())
    }

    /// Reverts the most recent `place` in this column
    ///
    /// # Panics
    /// If the tile is empty or is not the top of its column, as this means
    /// moves were undone out of order
    pub fn undo(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        assert!(
            self.cells[idx].is_occupied(),
            "undo of empty cell ({}, {})",
            row,
            col
        );
        if row > 0 {
            let above = &self.cells[idx - self.cols];
            assert!(
                !above.is_occupied() && above.legal,
                "undo of ({}, {}) out of stack order",
                row,
                col
            );
        }
        self.clear(row, col);
    }

    /// Empties a tile and takes legality from the tile above, without checks
    fn clear(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        if row > 0 {
            self.cells[idx - self.cols].legal = false;
        }
        self.cells[idx] = Cell {
            color: None,
            legal: true,
        };
    }

    /// Places a tile for the lifetime of the returned guard, which undoes it when dropped
    pub fn speculate(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Speculation<'_>, GameError> {
        self.place(row, col, player)?;
        Ok(Speculation {
            board: self,
            row,
            col,
        })
    }

    /// The legal row of a column, if the column is not full
    pub fn legal_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.cell(row, col).legal)
    }

    /// All legal moves, columns ascending and rows bottom-to-top within a column
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.cols).flat_map(move |col| {
            (0..self.rows)
                .rev()
                .filter(move |&row| self.cell(row, col).legal)
                .map(move |row| Move::new(row, col))
        })
    }

    /// True once no tile anywhere can be filled
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.legal)
    }

    /// Number of tiles holding a disc of the given player
    pub fn occupied(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.color == Some(player))
            .count()
    }
}

/// A speculatively placed tile
///
/// Dereferences to the board so a search can recurse through it. The tile is
/// removed again on every exit path when the guard goes out of scope.
pub struct Speculation<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        // a second panic while unwinding would abort the process
        if std::thread::panicking() {
            self.board.clear(self.row, self.col);
        } else {
            self.board.undo(self.row, self.col);
        }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}
