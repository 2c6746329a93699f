#![cfg(feature = "std")]

//! Terminal helpers for the interactive binary: coordinate parsing and
//! board printing.

use std::string::{String, ToString};

use serde::Serialize;

use crate::board::{column_label, MAX_LABELLED_COLUMNS};
use crate::game::{GameSession, GameStatus};
use crate::Coord;

/// Summary of a finished game, printed as one JSON line by the simulators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub winner: &'static str,
    pub turns: usize,
    pub player_targets_left: usize,
    pub computer_targets_left: usize,
}

impl SimReport {
    /// `None` while the game is still running.
    pub fn from_session(session: &GameSession) -> Option<Self> {
        let winner = match session.status() {
            GameStatus::Won => "player",
            GameStatus::Lost => "computer",
            GameStatus::InProgress => return None,
        };
        Some(Self {
            winner,
            turns: session.turns(),
            player_targets_left: session.player_grid().targets().len(),
            computer_targets_left: session.enemy_grid().targets().len(),
        })
    }
}

/// Human-readable label of a coordinate, e.g. `A1` for (0, 0).
pub fn coord_to_string(coord: Coord) -> String {
    format!("{}{}", column_label(coord.x), coord.y + 1)
}

/// Parse `A5`-style input into a coordinate on a `width × height` grid.
/// The letter selects the column (x), the number the row (y, 1-based).
/// Grids wider than `A..Z` cannot be addressed this way.
pub fn parse_coord(input: &str, width: usize, height: usize) -> Result<Coord, String> {
    if width > MAX_LABELLED_COLUMNS {
        return Err(format!(
            "Grid is {} columns wide - letters only cover {}",
            width, MAX_LABELLED_COLUMNS
        ));
    }
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= width {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch,
            column_label(width.saturating_sub(1))
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, height))?;
    if row == 0 || row > height {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, height));
    }
    Ok(Coord::new(x, row - 1))
}

/// Print the computer's grid (top) and the player's grid (bottom).
pub fn print_session(session: &GameSession, reveal_enemy: bool) {
    println!("\nComputer board:");
    println!("{}", session.enemy_grid().view(reveal_enemy));
    println!("    Targets left: {}", session.enemy_grid().targets().len());
    println!("\nYour board:");
    println!("{}", session.player_grid().view(true));
    println!("    Targets left: {}", session.player_grid().targets().len());
    if let Some(last) = session.last_ai_move() {
        println!("    Last computer shot: {}", coord_to_string(last));
    }
    println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
}
