//! Human-vs-computer game session: two generated grids, the computer's
//! hunting state and the turn order between the two sides.

use alloc::vec::Vec;
use log::info;

use crate::{
    ai::{next_ai_move, AiState},
    board::Grid,
    common::{BoardError, Coord, GameError, HitResult},
    config::{BOARD_HEIGHT, BOARD_WIDTH, FLEET},
    dice::Dice,
    generator::new_grid,
    ship::ShipClass,
};

/// Current status of a game, seen from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What happened during one call to [`GameSession::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub player_shot: HitResult,
    /// `None` when the player's shot ended the game.
    pub ai_shot: Option<(Coord, HitResult)>,
    pub status: GameStatus,
}

/// One human-vs-computer game: both grids, the AI's memory and the status.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    /// Fleet both grids were dealt with; reused by `restart`.
    fleet: Vec<ShipClass>,
    /// The human's ships; the AI shoots here.
    player_grid: Grid,
    /// The computer's ships; the human shoots here.
    enemy_grid: Grid,
    ai: AiState,
    last_ai_move: Option<Coord>,
    status: GameStatus,
    turns: usize,
}

impl GameSession {
    /// Start a game with the standard fleet on the standard board.
    pub fn new<D: Dice + ?Sized>(dice: &mut D) -> Result<Self, BoardError> {
        Self::with_fleet(&FLEET, BOARD_WIDTH, BOARD_HEIGHT, dice)
    }

    /// Start a game with a custom fleet and board size.
    pub fn with_fleet<D: Dice + ?Sized>(
        fleet: &[ShipClass],
        width: usize,
        height: usize,
        dice: &mut D,
    ) -> Result<Self, BoardError> {
        let player_grid = new_grid(fleet, width, height, dice)?;
        let enemy_grid = new_grid(fleet, width, height, dice)?;
        Ok(Self {
            fleet: fleet.to_vec(),
            player_grid,
            enemy_grid,
            ai: AiState::for_fleet(fleet, width, height),
            last_ai_move: None,
            status: GameStatus::InProgress,
            turns: 0,
        })
    }

    /// Throw the current game away and deal a new one with the same fleet
    /// and board size.
    pub fn restart<D: Dice + ?Sized>(&mut self, dice: &mut D) -> Result<(), BoardError> {
        let fresh = Self::with_fleet(
            &self.fleet,
            self.player_grid.width(),
            self.player_grid.height(),
            dice,
        )?;
        *self = fresh;
        Ok(())
    }

    pub fn fleet(&self) -> &[ShipClass] {
        &self.fleet
    }

    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    pub fn enemy_grid(&self) -> &Grid {
        &self.enemy_grid
    }

    pub fn ai_state(&self) -> &AiState {
        &self.ai
    }

    /// Coordinate of the AI's most recent shot, for highlighting.
    pub fn last_ai_move(&self) -> Option<Coord> {
        self.last_ai_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of completed human shots.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Fire the human's shot at `target`, then let the AI answer unless the
    /// human just won.
    pub fn play_turn<D: Dice + ?Sized>(
        &mut self,
        target: Coord,
        dice: &mut D,
    ) -> Result<TurnOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let player_shot = self.enemy_grid.record_shot(target)?;
        self.turns += 1;
        if self.enemy_grid.is_cleared() {
            info!("player cleared the enemy grid after {} turns", self.turns);
            self.status = GameStatus::Won;
            return Ok(TurnOutcome {
                player_shot,
                ai_shot: None,
                status: self.status,
            });
        }

        let ai_move = next_ai_move(&mut self.ai, &self.player_grid, dice)?;
        let ai_result = self.player_grid.record_shot(ai_move)?;
        self.last_ai_move = Some(ai_move);
        if self.player_grid.is_cleared() {
            info!("computer cleared the player grid after {} turns", self.turns);
            self.status = GameStatus::Lost;
        }

        Ok(TurnOutcome {
            player_shot,
            ai_shot: Some((ai_move, ai_result)),
            status: self.status,
        })
    }

    /// Play the human side with `autopilot` until the game ends.
    pub fn autoplay<D: Dice + ?Sized>(
        &mut self,
        autopilot: &mut AiState,
        dice: &mut D,
    ) -> Result<GameStatus, GameError> {
        while self.status == GameStatus::InProgress {
            let target = next_ai_move(autopilot, &self.enemy_grid, dice)?;
            self.play_turn(target, dice)?;
        }
        Ok(self.status)
    }
}
