//! Lifecycle bracket of one parse pass.
//!
//! ```text
//! Idle --init--> Open --close--> Closed
//!   \____ grammar violation ____> Faulted
//! ```
//!
//! Nothing may arrive before `init` or after `close`. A refused call leaves
//! the phase as it was. Only the validator enters `Faulted`, and a faulted
//! pass cannot be resumed.

use crate::error::SequenceError;
use crate::event::EventKind;

/// Phase of a parse pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for `init`
    #[default]
    Idle,
    /// Between `init` and `close`
    Open,
    /// `close` has been accepted
    Closed,
    /// The stream broke the grammar; the pass is over
    Faulted,
}

/// Tracks the lifecycle phase and the number of accepted calls
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    phase: Phase,
    position: usize,
}

impl Lifecycle {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            position: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Index the next call will have in the stream
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open)
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.phase, Phase::Closed)
    }

    /// Admit a call of `kind` and move to the next phase.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the phase untouched, if `kind` is not allowed
    /// in the current phase.
    pub fn advance(&mut self, kind: EventKind) -> Result<(), SequenceError> {
        let position = self.position;
        let next = match (self.phase, kind) {
            (Phase::Faulted, _) => return Err(SequenceError::Faulted { position, kind }),
            (Phase::Closed, _) => return Err(SequenceError::AfterClose { position, kind }),
            (Phase::Idle, EventKind::Init) => Phase::Open,
            (Phase::Idle, _) => return Err(SequenceError::NotInitialized { position, kind }),
            (Phase::Open, EventKind::Init) => {
                return Err(SequenceError::AlreadyInitialized { position })
            }
            (Phase::Open, EventKind::Close) => Phase::Closed,
            (Phase::Open, _) => Phase::Open,
        };
        self.phase = next;
        self.position += 1;
        Ok(())
    }

    /// Mark the pass as aborted; every later call is refused
    pub fn fault(&mut self) {
        self.phase = Phase::Faulted;
    }
}
