//! Commonly used types and utilities for ease of import.

pub use crate::{
    new_ai_state, new_grid, next_ai_move, AiState, Coord, Dice, GameSession, GameStatus, Grid,
    HitResult, FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
