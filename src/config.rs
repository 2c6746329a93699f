use alloc::vec::Vec;

use crate::ship::ShipClass;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const NUM_SHIP_CLASSES: usize = 4;
pub static FLEET: [ShipClass; NUM_SHIP_CLASSES] = [
    ShipClass::new("Carrier", 4, 1),
    ShipClass::new("Cruiser", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Frigate", 1, 4),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_TILES: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Total number of ships in the standard configuration.
pub const TOTAL_SHIPS: usize = 1 + 2 + 3 + 4;

/// Number of tiles every ship of `fleet` occupies once placed.
pub fn fleet_tile_count(fleet: &[ShipClass]) -> usize {
    fleet.iter().map(|class| class.length() * class.count()).sum()
}

/// One entry per ship instance, in table order (`[4, 3, 3, 2, ...]` for the
/// standard fleet).
pub fn fleet_ship_lengths(fleet: &[ShipClass]) -> Vec<usize> {
    let mut lengths = Vec::with_capacity(fleet.iter().map(|c| c.count()).sum());
    for class in fleet {
        for _ in 0..class.count() {
            lengths.push(class.length());
        }
    }
    lengths
}

/// Class name for a ship of `length` in the standard fleet.
pub fn class_name_for_length(length: usize) -> Option<&'static str> {
    FLEET
        .iter()
        .find(|class| class.length() == length)
        .map(|class| class.name())
}
