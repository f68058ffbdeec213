use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
///
/// Playing again means creating a new session, a won session never resumes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Outcome of toggling a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Every candidate position was off the board
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
            Self::Won => true,
        }
    }
}

/// The single active game: owns the board and derives the win state from it after every toggle.
///
/// Only serializable, a stored state could not be trusted to match its board.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaySession {
    board: Board,
    state: GameState,
    moves: u32,
}

impl PlaySession {
    /// Starts playing on `board`, an already clear board still has to be toggled once to be won.
    pub fn new(board: Board) -> Self {
        log::debug!(
            "New {}x{} session with {} lit cells",
            board.rows(),
            board.cols(),
            board.lit_count()
        );
        Self {
            board,
            state: GameState::Playing,
            moves: 0,
        }
    }

    /// Generates the board with `generator` and starts playing on it.
    pub fn generate(generator: impl BoardGenerator, config: BoardConfig) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn has_won(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.board.is_lit(coords)
    }

    pub fn toggle(&mut self, coords: Coord2) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        self.check_not_finished()?;

        if self.board.cross(coords).next().is_none() {
            log::trace!("toggle {:?} is entirely off the board", coords);
            return Ok(NoChange);
        }

        let won = self.board.toggle(coords);
        self.moves = self.moves.saturating_add(1);
        log::trace!("toggle {:?}, {} lit", coords, self.board.lit_count());

        Ok(if won {
            log::debug!("Board cleared after {} moves", self.moves);
            self.state = GameState::Won;
            Won
        } else {
            Toggled
        })
    }

    /// A cell that is part of a pattern clearing the current board.
    pub fn hint(&self) -> Option<Coord2> {
        if self.state.is_finished() {
            return None;
        }
        let hint = solve(&self.board).and_then(|solution| solution.iter_presses().next());
        if hint.is_none() {
            log::warn!("No hint available, board cannot be cleared");
        }
        hint
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
