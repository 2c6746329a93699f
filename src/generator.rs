//! Random fleet placement with a one-tile buffer around every ship.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::board::Grid;
use crate::common::{BoardError, Coord};
use crate::dice::Dice;
use crate::ship::{Orientation, ShipClass, ShipPlacement};

/// Empty grid: nothing occupied, no spacing, no shots.
pub fn create_empty_grid(width: usize, height: usize) -> Grid {
    Grid::new(width, height)
}

/// Place every ship of `fleet`, class by class in table order.
pub fn place_fleet<D: Dice + ?Sized>(
    grid: &mut Grid,
    fleet: &[ShipClass],
    dice: &mut D,
) -> Result<Vec<ShipPlacement>, BoardError> {
    let mut placements = Vec::new();
    for class in fleet {
        for _ in 0..class.count() {
            let placement = place_one_ship(grid, class.length(), dice)?;
            debug!(
                "placed {} at {} ({:?})",
                class.name(),
                placement.head(),
                placement.orientation()
            );
            placements.push(placement);
        }
    }
    Ok(placements)
}

/// Place one ship of `length` at a random head tile.
///
/// The orientation is drawn once; only the head is retried. Each rejected
/// head leaves the candidate pool, and an exhausted pool means the fleet
/// cannot fit.
pub fn place_one_ship<D: Dice + ?Sized>(
    grid: &mut Grid,
    length: usize,
    dice: &mut D,
) -> Result<ShipPlacement, BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidShipLength);
    }
    let orientation = Orientation::random(dice);
    let mut candidates = grid.placement_ready_tiles();

    loop {
        if candidates.is_empty() {
            return Err(BoardError::FleetDoesNotFit { length });
        }
        let idx = dice.pick_index(candidates.len());
        let placement = ShipPlacement::new(candidates[idx], length, orientation);
        if fits(grid, &placement) {
            mark_ship(grid, &placement)?;
            return Ok(placement);
        }
        trace!("head {} rejected for length {}", candidates[idx], length);
        candidates.remove(idx);
    }
}

fn fits(grid: &Grid, placement: &ShipPlacement) -> bool {
    placement
        .body()
        .all(|tile| tile.is_some_and(|coord| grid.is_placement_ready(coord)))
}

fn mark_ship(grid: &mut Grid, placement: &ShipPlacement) -> Result<(), BoardError> {
    for coord in placement.body().flatten() {
        grid.occupy(coord)?;
    }
    for coord in placement.halo() {
        grid.reserve_spacing(coord);
    }
    Ok(())
}

/// Coordinates of all occupied tiles. Call once placement is complete.
pub fn derive_target_list(grid: &Grid) -> BTreeSet<Coord> {
    grid.occupied_coords()
}

/// Build a ready-to-play grid: empty grid, fleet, target list.
pub fn new_grid<D: Dice + ?Sized>(
    fleet: &[ShipClass],
    width: usize,
    height: usize,
    dice: &mut D,
) -> Result<Grid, BoardError> {
    let mut grid = create_empty_grid(width, height);
    place_fleet(&mut grid, fleet, dice)?;
    let targets = derive_target_list(&grid);
    grid.set_targets(targets);
    Ok(grid)
}
