//! Game grid: tile occupancy, placement spacing, shot history and the
//! target list.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, HitResult};

/// One cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    coord: Coord,
    occupied: bool,
    spacing: bool,
    hit: Option<HitResult>,
}

impl Tile {
    fn empty(coord: Coord) -> Self {
        Tile {
            coord,
            occupied: false,
            spacing: false,
            hit: None,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// A ship segment sits on this tile.
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Reserved as buffer around a placed ship.
    pub fn is_spacing(&self) -> bool {
        self.spacing
    }

    /// Result of the shot fired at this tile, if any.
    pub fn hit_result(&self) -> Option<HitResult> {
        self.hit
    }

    /// Free for a new ship segment: neither occupied nor spacing.
    pub fn is_placement_ready(&self) -> bool {
        !self.occupied && !self.spacing
    }
}

/// A `width × height` matrix of tiles plus the list of ship tiles not yet hit.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    targets: BTreeSet<Coord>,
}

impl Grid {
    /// Create a grid with every tile empty, no spacing and no hit result.
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::empty(Coord::new(x, y)));
            }
        }
        Grid {
            width,
            height,
            tiles,
            targets: BTreeSet::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Tile at `coord`.
    pub fn tile(&self, coord: Coord) -> Result<&Tile, BoardError> {
        let idx = self.index(coord)?;
        Ok(&self.tiles[idx])
    }

    fn tile_mut(&mut self, coord: Coord) -> Result<&mut Tile, BoardError> {
        let idx = self.index(coord)?;
        Ok(&mut self.tiles[idx])
    }

    /// All tiles, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Whether a ship segment sits at `coord`.
    pub fn is_occupied(&self, coord: Coord) -> Result<bool, BoardError> {
        Ok(self.tile(coord)?.occupied)
    }

    /// In bounds and free for a new ship segment.
    pub fn is_placement_ready(&self, coord: Coord) -> bool {
        self.tile(coord).is_ok_and(Tile::is_placement_ready)
    }

    /// Coordinates of every placement-ready tile, x-major.
    pub fn placement_ready_tiles(&self) -> Vec<Coord> {
        let mut ready = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                let coord = Coord::new(x, y);
                if self.is_placement_ready(coord) {
                    ready.push(coord);
                }
            }
        }
        ready
    }

    pub(crate) fn occupy(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.tile_mut(coord)?.occupied = true;
        Ok(())
    }

    /// Mark `coord` as spacing if it is still placement-ready. Off-board
    /// and already used tiles are left alone.
    pub(crate) fn reserve_spacing(&mut self, coord: Coord) {
        if let Ok(tile) = self.tile_mut(coord) {
            if tile.is_placement_ready() {
                tile.spacing = true;
            }
        }
    }

    /// Coordinates of all occupied tiles.
    pub fn occupied_coords(&self) -> BTreeSet<Coord> {
        self.tiles
            .iter()
            .filter(|t| t.occupied)
            .map(|t| t.coord)
            .collect()
    }

    pub(crate) fn set_targets(&mut self, targets: BTreeSet<Coord>) {
        self.targets = targets;
    }

    /// Ship tiles that have not been hit yet.
    pub fn targets(&self) -> &BTreeSet<Coord> {
        &self.targets
    }

    /// Record a shot at `coord`. On damage the coordinate leaves the target
    /// list; a miss never touches it.
    pub fn record_shot(&mut self, coord: Coord) -> Result<HitResult, BoardError> {
        let tile = self.tile_mut(coord)?;
        if tile.hit.is_some() {
            return Err(BoardError::AlreadyShot {
                x: coord.x,
                y: coord.y,
            });
        }
        let result = if tile.occupied {
            HitResult::Damage
        } else {
            HitResult::Miss
        };
        tile.hit = Some(result);
        if result == HitResult::Damage {
            self.targets.remove(&coord);
        }
        Ok(result)
    }

    /// Returns `true` when every ship tile has been hit.
    pub fn is_cleared(&self) -> bool {
        self.targets.is_empty()
    }

    /// Text view of the grid; ships are shown only when `reveal` is set.
    pub fn view(&self, reveal: bool) -> GridView<'_> {
        GridView { grid: self, reveal }
    }

    #[inline]
    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok(coord.y * self.width + coord.x)
        } else {
            Err(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })
        }
    }
}

/// Read access to a tile, as used by rendering and by the AI.
pub fn query_tile(grid: &Grid, coord: Coord) -> Result<&Tile, BoardError> {
    grid.tile(coord)
}

/// Mark a shot on `grid`; see [`Grid::record_shot`].
pub fn record_shot(grid: &mut Grid, coord: Coord) -> Result<HitResult, BoardError> {
    grid.record_shot(coord)
}

/// `true` once the grid's target list is empty.
pub fn is_cleared(grid: &Grid) -> bool {
    grid.is_cleared()
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ {}x{}, targets left: {} }}",
            self.width,
            self.height,
            self.targets.len()
        )?;
        write!(f, "{}", self.view(true))
    }
}

/// Text rendering of a grid: `X` damage, `o` miss, `S` ship, `.` water.
/// Column letters are only unique up to [`MAX_LABELLED_COLUMNS`].
pub struct GridView<'a> {
    grid: &'a Grid,
    reveal: bool,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.grid.width {
            write!(f, " {}", column_label(x))?;
        }
        writeln!(f)?;
        for y in 0..self.grid.height {
            write!(f, "{:2} ", y + 1)?;
            for x in 0..self.grid.width {
                let tile = &self.grid.tiles[y * self.grid.width + x];
                let ch = match tile.hit {
                    Some(HitResult::Damage) => 'X',
                    Some(HitResult::Miss) => 'o',
                    None if self.reveal && tile.occupied => 'S',
                    None => '.',
                };
                write!(f, " {}", ch)?;
            }
            if y + 1 < self.grid.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Columns the text view can letter unambiguously (`A..Z`).
pub const MAX_LABELLED_COLUMNS: usize = 26;

/// Column letter for `x` (`A` for 0). Labels repeat past `Z`, so the text
/// view and `A5`-style input only support grids up to
/// [`MAX_LABELLED_COLUMNS`] wide.
pub fn column_label(x: usize) -> char {
    (b'A' + (x % 26) as u8) as char
}
