//! Deferred dispatch of the computer's turn
//!
//! The human's move should be visible to the front end before the blocking
//! search starts, so a pending computer turn is posted to a queue and only run
//! once the caller drains it, typically after redrawing.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use tracing::debug;

use crate::{
    board::Move,
    error::GameError,
    session::{GameSession, Transition},
};

enum Task {
    ComputerTurn,
}

/// A queue holding at most one pending computer turn
pub struct TurnScheduler {
    tx: Sender<Task>,
    rx: Receiver<Task>,
    pending: bool,
}

impl TurnScheduler {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            pending: false,
        }
    }

    /// Queues the computer's turn, returning false if one is already queued
    pub fn post_computer_turn(&mut self) -> bool {
        if self.pending {
            return false;
        }
        // the receiver lives in self, so the send can't fail
        let _ = self.tx.send(Task::ComputerTurn);
        self.pending = true;
        debug!("computer turn posted");
        true
    }

    /// Queues the computer's turn if the transition asks for one
    pub fn observe(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::ComputerTurnPending => self.post_computer_turn(),
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Runs every queued task against the session
    ///
    /// Returns the computer's move if one was played.
    pub fn run_pending(
        &mut self,
        session: &mut GameSession,
    ) -> Result<Option<(Move, Transition)>, GameError> {
        let mut played = None;
        loop {
            match self.rx.try_recv() {
                Ok(Task::ComputerTurn) => {
                    self.pending = false;
                    played = Some(session.computer_move()?);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(played)
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new()
    }
}
