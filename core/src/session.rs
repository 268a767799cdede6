use crate::*;

/// Identifies one start sequence. Results from an older one are stale.
pub type Generation = u64;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Loading,
    Ready,
    Failed(TriviaError),
}

impl GamePhase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Owns the board for the current page session and the loading phase around it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    phase: GamePhase,
    board: Option<Board>,
    generation: Generation,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Whether the busy indicator should be on screen.
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Drops the current board and enters `Loading`. The returned generation
    /// must be handed back to [`Self::complete`] with the fetch result.
    pub fn restart(&mut self) -> Generation {
        self.board = None;
        self.generation = self.generation.wrapping_add(1);
        self.phase = GamePhase::Loading;
        log::debug!("restart: generation {}", self.generation);
        self.generation
    }

    /// Applies a fetch result, unless a newer restart has happened since.
    pub fn complete(&mut self, generation: Generation, result: Result<Board>) -> Completion {
        if generation != self.generation {
            log::debug!(
                "dropping stale board: generation {} (current {})",
                generation,
                self.generation
            );
            return Completion::Stale;
        }

        match result {
            Ok(board) => {
                self.board = Some(board);
                self.phase = GamePhase::Ready;
                log::debug!("board ready: generation {}", generation);
            }
            Err(err) => {
                log::error!("failed to load board: {}", err);
                self.phase = GamePhase::Failed(err);
            }
        }
        Completion::Applied
    }

    pub fn activate(&mut self, id: CellId) -> Result<AdvanceOutcome<'_>> {
        match (&self.phase, self.board.as_mut()) {
            (GamePhase::Ready, Some(board)) => board.advance_reveal(id.pos()),
            _ => {
                log::trace!("ignoring activation of {} while not ready", id);
                Err(TriviaError::NotReady)
            }
        }
    }

    /// Current grid, present only once the board is ready.
    pub fn view(&self) -> Option<BoardView> {
        match (&self.phase, &self.board) {
            (GamePhase::Ready, Some(board)) => Some(render(board)),
            _ => None,
        }
    }
}
