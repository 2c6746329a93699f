//! Ship classes and the tile geometry of a placed ship.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::common::Coord;
use crate::dice::Dice;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Horizontal or vertical with equal probability.
    pub fn random<D: Dice + ?Sized>(dice: &mut D) -> Self {
        if dice.flip() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A class of ship in a fleet table: name, length and how many to place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipClass {
    name: Cow<'static, str>,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            length,
            count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// A ship's position: head tile, length and orientation.
///
/// Placements are not kept by the grid; they only describe which tiles a
/// ship covers and which tiles surround it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    head: Coord,
    length: usize,
    orientation: Orientation,
}

impl ShipPlacement {
    pub fn new(head: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            head,
            length,
            orientation,
        }
    }

    pub fn head(&self) -> Coord {
        self.head
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Body tiles starting at the head. Tiles whose coordinates would
    /// overflow are yielded as `None`.
    pub fn body(&self) -> impl Iterator<Item = Option<Coord>> + '_ {
        (0..self.length).map(move |shift| self.shifted(shift as isize, 0))
    }

    /// Bounding rectangle of the body grown by one tile on every side,
    /// body included. Tiles with a negative coordinate are skipped.
    pub fn halo(&self) -> Vec<Coord> {
        let mut tiles = Vec::with_capacity(3 * (self.length + 2));
        for length_shift in -1..=self.length as isize {
            for width_shift in -1isize..=1 {
                if let Some(coord) = self.shifted(length_shift, width_shift) {
                    tiles.push(coord);
                }
            }
        }
        tiles
    }

    fn shifted(&self, along: isize, across: isize) -> Option<Coord> {
        match self.orientation {
            Orientation::Horizontal => self.head.offset(along, across),
            Orientation::Vertical => self.head.offset(across, along),
        }
    }
}
