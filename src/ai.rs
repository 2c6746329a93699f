//! Hunting strategy for the computer opponent.
//!
//! The AI fires at random (`Search`) until a shot lands, then switches to
//! `Attack` and probes around the hit until the ship is provably destroyed.
//! Every coordinate is tried at most once. Once a ship is destroyed its
//! whole neighbourhood is dropped from the candidate moves, because the
//! placement rules keep other ships at least one tile away.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::board::Grid;
use crate::common::{AiError, Coord, Direction};
use crate::config::{class_name_for_length, fleet_ship_lengths, BOARD_HEIGHT, BOARD_WIDTH, FLEET};
use crate::dice::Dice;
use crate::ship::ShipClass;

/// Current phase of the hunting state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Search,
    Attack,
}

/// Turn-to-turn memory of the computer opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AiState {
    mode: Mode,
    attack_direction: Option<Direction>,
    hit_moves: Vec<Coord>,
    available_moves: BTreeSet<Coord>,
    available_directions: Vec<Direction>,
    remaining_ship_lengths: Vec<usize>,
}

impl AiState {
    /// Fresh state for the standard fleet on the standard board.
    pub fn new() -> Self {
        Self::for_fleet(&FLEET, BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Fresh state hunting `fleet` on a `width × height` grid.
    pub fn for_fleet(fleet: &[ShipClass], width: usize, height: usize) -> Self {
        let mut available_moves = BTreeSet::new();
        for x in 0..width {
            for y in 0..height {
                available_moves.insert(Coord::new(x, y));
            }
        }
        AiState {
            mode: Mode::Search,
            attack_direction: None,
            hit_moves: Vec::new(),
            available_moves,
            available_directions: Direction::ALL.to_vec(),
            remaining_ship_lengths: fleet_ship_lengths(fleet),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn attack_direction(&self) -> Option<Direction> {
        self.attack_direction
    }

    /// Hits of the current attack sequence, oldest first.
    pub fn hit_moves(&self) -> &[Coord] {
        &self.hit_moves
    }

    /// Coordinates not yet tried or excluded.
    pub fn available_moves(&self) -> &BTreeSet<Coord> {
        &self.available_moves
    }

    /// Directions not yet probed in the current attack sequence.
    pub fn available_directions(&self) -> &[Direction] {
        &self.available_directions
    }

    /// Lengths of the opponent ships not yet destroyed.
    pub fn remaining_ship_lengths(&self) -> &[usize] {
        &self.remaining_ship_lengths
    }

    fn is_available(&self, coord: Option<Coord>) -> bool {
        coord.is_some_and(|c| self.available_moves.contains(&c))
    }
}

impl Default for AiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh hunting state for the standard game.
pub fn new_ai_state() -> AiState {
    AiState::new()
}

/// Pick the AI's next shot against `opponent` and update `state` with the
/// outcome.
///
/// If an attack sequence finishes while choosing, the same call falls back
/// to a search move, so a coordinate is always returned unless the state is
/// inconsistent.
pub fn next_ai_move<D: Dice + ?Sized>(
    state: &mut AiState,
    opponent: &Grid,
    dice: &mut D,
) -> Result<Coord, AiError> {
    let coord = choose_next_move(state, dice)?;
    state.available_moves.remove(&coord);

    if opponent.is_occupied(coord)? {
        state.hit_moves.push(coord);
        if state.mode == Mode::Search {
            debug!("ai: hit at {}, switching to attack", coord);
            state.mode = Mode::Attack;
        }
    }
    Ok(coord)
}

fn choose_next_move<D: Dice + ?Sized>(state: &mut AiState, dice: &mut D) -> Result<Coord, AiError> {
    if state.mode == Mode::Attack {
        if let Some(coord) = attack_ship(state, dice)? {
            return Ok(coord);
        }
    }
    match state.mode {
        Mode::Search => random_move(state, dice),
        Mode::Attack => Err(AiError::StalledAttack),
    }
}

fn random_move<D: Dice + ?Sized>(state: &AiState, dice: &mut D) -> Result<Coord, AiError> {
    let len = state.available_moves.len();
    if len == 0 {
        return Err(AiError::NoMovesLeft);
    }
    let idx = dice.pick_index(len);
    state
        .available_moves
        .iter()
        .nth(idx)
        .copied()
        .ok_or(AiError::NoMovesLeft)
}

/// One attack step. Returns `None` when the attacked ship is considered
/// destroyed; the state is back in search mode in that case.
pub fn attack_ship<D: Dice + ?Sized>(
    state: &mut AiState,
    dice: &mut D,
) -> Result<Option<Coord>, AiError> {
    let biggest = state
        .remaining_ship_lengths
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    if state.hit_moves.len() >= biggest {
        // No larger ship left, this one is done.
        finish_attack(state)?;
        return Ok(None);
    }
    if state.hit_moves.len() == 1 {
        attack_after_first_hit(state, dice)
    } else {
        attack_after_second_hit(state)
    }
}

/// Probe random untried directions around the single hit.
fn attack_after_first_hit<D: Dice + ?Sized>(
    state: &mut AiState,
    dice: &mut D,
) -> Result<Option<Coord>, AiError> {
    while !state.available_directions.is_empty() {
        let idx = dice.pick_index(state.available_directions.len());
        let direction = state.available_directions.remove(idx);
        state.attack_direction = Some(direction);

        let candidate = move_by_direction(state, direction);
        trace!("ai: probing {:?} -> {:?}", direction, candidate);
        if state.is_available(candidate) {
            return Ok(candidate);
        }
    }
    finish_attack(state)?;
    Ok(None)
}

/// Keep going along the established line, then try the other end.
fn attack_after_second_hit(state: &mut AiState) -> Result<Option<Coord>, AiError> {
    let direction = state.attack_direction.ok_or(AiError::StalledAttack)?;
    let forward = move_by_direction(state, direction);
    if state.is_available(forward) {
        return Ok(forward);
    }

    let reversed = direction.reversed();
    state.attack_direction = Some(reversed);
    let backward = state.hit_moves.first().and_then(|first| first.step(reversed));
    trace!("ai: reversing to {:?} -> {:?}", reversed, backward);
    if state.is_available(backward) {
        return Ok(backward);
    }

    finish_attack(state)?;
    Ok(None)
}

fn move_by_direction(state: &AiState, direction: Direction) -> Option<Coord> {
    state.hit_moves.last().and_then(|last| last.step(direction))
}

/// Close the current attack sequence: forget the destroyed ship, drop its
/// surroundings from the candidate moves and go back to search.
pub fn finish_attack(state: &mut AiState) -> Result<(), AiError> {
    let length = state.hit_moves.len();
    let pos = state
        .remaining_ship_lengths
        .iter()
        .position(|&l| l == length)
        .ok_or(AiError::UnknownShipLength(length))?;
    state.remaining_ship_lengths.remove(pos);
    debug!(
        "ai: {} of length {} destroyed, {} ships left",
        class_name_for_length(length).unwrap_or("ship"),
        length,
        state.remaining_ship_lengths.len()
    );

    for tile in &state.hit_moves {
        for neighbour in tile.neighbourhood() {
            state.available_moves.remove(&neighbour);
        }
    }

    state.mode = Mode::Search;
    state.attack_direction = None;
    state.hit_moves.clear();
    state.available_directions = Direction::ALL.to_vec();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::scripted::ScriptedDice;
    use crate::generator::create_empty_grid;
    use alloc::vec;

    fn attacking(hits: Vec<Coord>) -> AiState {
        let mut state = AiState::new();
        for hit in &hits {
            state.available_moves.remove(hit);
        }
        state.mode = Mode::Attack;
        state.hit_moves = hits;
        state
    }

    #[test]
    fn first_hit_probes_drawn_direction() {
        let mut state = attacking(vec![Coord::new(9, 8)]);
        let mut dice = ScriptedDice::new(vec![0], vec![]);

        let mv = attack_ship(&mut state, &mut dice).unwrap();

        assert_eq!(mv, Some(Coord::new(9, 7)));
        assert_eq!(state.attack_direction(), Some(Direction::Up));
        assert_eq!(
            state.available_directions(),
            &[Direction::Down, Direction::Left, Direction::Right]
        );
        assert_eq!(state.mode(), Mode::Attack);
    }

    #[test]
    fn first_hit_skips_unavailable_directions() {
        let mut state = attacking(vec![Coord::new(9, 8)]);
        state.available_moves.remove(&Coord::new(9, 7));
        // Up (tried), then Right from [Down, Left, Right] is off the board,
        // then Down from [Down, Left].
        let mut dice = ScriptedDice::new(vec![0, 2, 0], vec![]);

        let mv = attack_ship(&mut state, &mut dice).unwrap();

        assert_eq!(mv, Some(Coord::new(9, 9)));
        assert_eq!(state.attack_direction(), Some(Direction::Down));
        assert_eq!(state.available_directions(), &[Direction::Left]);
    }

    #[test]
    fn isolated_hit_finishes_after_all_directions() {
        let mut state = attacking(vec![Coord::new(0, 0)]);
        state.available_moves.remove(&Coord::new(0, 1));
        state.available_moves.remove(&Coord::new(1, 0));
        let mut dice = ScriptedDice::new(vec![], vec![]);

        let mv = attack_ship(&mut state, &mut dice).unwrap();

        assert_eq!(mv, None);
        assert_eq!(state.mode(), Mode::Search);
        assert_eq!(state.remaining_ship_lengths().iter().filter(|&&l| l == 1).count(), 3);
        assert!(!state.available_moves().contains(&Coord::new(1, 1)));
    }

    #[test]
    fn blocked_line_reverses_from_first_hit() {
        let mut state = attacking(vec![Coord::new(5, 5), Coord::new(5, 6)]);
        state.attack_direction = Some(Direction::Down);
        state.available_moves.remove(&Coord::new(5, 7));
        let mut dice = ScriptedDice::new(vec![], vec![]);

        let mv = attack_ship(&mut state, &mut dice).unwrap();

        assert_eq!(mv, Some(Coord::new(5, 4)));
        assert_eq!(state.attack_direction(), Some(Direction::Up));
    }

    #[test]
    fn reversed_line_keeps_extending_from_newest_hit() {
        // Vertical cruiser at (5,4)..(5,6), first hit in the middle.
        let mut grid = create_empty_grid(10, 10);
        for y in 4..=6 {
            grid.occupy(Coord::new(5, y)).unwrap();
        }
        let mut state = attacking(vec![Coord::new(5, 5)]);
        let mut dice = ScriptedDice::new(vec![0], vec![]);

        assert_eq!(next_ai_move(&mut state, &grid, &mut dice).unwrap(), Coord::new(5, 4));
        assert_eq!(next_ai_move(&mut state, &grid, &mut dice).unwrap(), Coord::new(5, 3));
        assert_eq!(next_ai_move(&mut state, &grid, &mut dice).unwrap(), Coord::new(5, 6));
        assert_eq!(state.attack_direction(), Some(Direction::Down));
        assert_eq!(
            state.hit_moves(),
            &[Coord::new(5, 5), Coord::new(5, 4), Coord::new(5, 6)]
        );

        assert_eq!(next_ai_move(&mut state, &grid, &mut dice).unwrap(), Coord::new(5, 7));
        assert_eq!(state.mode(), Mode::Attack);

        // Both ends now missed: the cruiser is done and the AI searches.
        assert_eq!(next_ai_move(&mut state, &grid, &mut dice).unwrap(), Coord::new(0, 0));
        assert_eq!(state.mode(), Mode::Search);
        assert_eq!(state.remaining_ship_lengths(), &[4, 3, 2, 2, 2, 1, 1, 1, 1]);
        assert!(!state.available_moves().contains(&Coord::new(4, 3)));
        assert!(!state.available_moves().contains(&Coord::new(6, 7)));
    }

    #[test]
    fn blocked_both_ends_finishes_and_searches_same_call() {
        let mut state = attacking(vec![Coord::new(5, 5), Coord::new(5, 6)]);
        state.attack_direction = Some(Direction::Down);
        state.available_moves.remove(&Coord::new(5, 7));
        state.available_moves.remove(&Coord::new(5, 4));
        let empty = create_empty_grid(10, 10);
        let mut dice = ScriptedDice::new(vec![0], vec![]);

        let mv = next_ai_move(&mut state, &empty, &mut dice).unwrap();

        assert_eq!(mv, Coord::new(0, 0));
        assert_eq!(state.mode(), Mode::Search);
        assert!(state.hit_moves().is_empty());
        assert_eq!(state.available_directions(), &Direction::ALL);
        assert_eq!(state.remaining_ship_lengths(), &[4, 3, 3, 2, 2, 1, 1, 1, 1]);
        for x in 4..=6 {
            for y in 4..=7 {
                assert!(!state.available_moves().contains(&Coord::new(x, y)));
            }
        }
    }

    #[test]
    fn guard_finishes_when_no_bigger_ship_remains() {
        let mut state = attacking(vec![Coord::new(2, 2), Coord::new(3, 2)]);
        state.attack_direction = Some(Direction::Right);
        state.remaining_ship_lengths = vec![2, 1];
        let mut dice = ScriptedDice::new(vec![], vec![]);

        let mv = attack_ship(&mut state, &mut dice).unwrap();

        assert_eq!(mv, None);
        assert_eq!(state.remaining_ship_lengths(), &[1]);
        assert_eq!(state.mode(), Mode::Search);
    }

    #[test]
    fn unknown_length_is_an_error() {
        let mut state = attacking(vec![Coord::new(2, 2), Coord::new(3, 2)]);
        state.remaining_ship_lengths = vec![4, 1];
        assert_eq!(finish_attack(&mut state), Err(AiError::UnknownShipLength(2)));
    }

    #[test]
    fn search_hit_switches_to_attack() {
        let mut state = AiState::new();
        let mut grid = create_empty_grid(10, 10);
        grid.occupy(Coord::new(0, 0)).unwrap();
        let mut dice = ScriptedDice::new(vec![0], vec![]);

        let mv = next_ai_move(&mut state, &grid, &mut dice).unwrap();

        assert_eq!(mv, Coord::new(0, 0));
        assert_eq!(state.mode(), Mode::Attack);
        assert_eq!(state.hit_moves(), &[Coord::new(0, 0)]);
        assert!(!state.available_moves().contains(&Coord::new(0, 0)));
    }

    #[test]
    fn empty_search_pool_is_an_error() {
        let mut state = AiState::new();
        state.available_moves.clear();
        let grid = create_empty_grid(10, 10);
        let mut dice = ScriptedDice::new(vec![], vec![]);
        assert_eq!(
            next_ai_move(&mut state, &grid, &mut dice),
            Err(AiError::NoMovesLeft)
        );
    }
}
