//! Common types for the naval battle core: coordinates, shot results, errors.

use core::fmt;

/// A tile position on a grid. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset. `None` if either axis would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Adjacent coordinate one step in `direction`.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// The 3×3 block centred on this coordinate, clipped at zero.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coord> {
        (-1isize..=1)
            .flat_map(move |dx| (-1isize..=1).filter_map(move |dy| self.offset(dx, dy)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Attack direction used by the targeting AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Probing order used when a fresh attack sequence starts.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Outcome of a shot at a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    /// Shot landed on empty water.
    Miss,
    /// Shot damaged a ship segment.
    Damage,
}

/// Errors returned by grid construction and shot recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// No head tile left for a ship of this length; the fleet is too large
    /// for the grid.
    FleetDoesNotFit { length: usize },
    /// Ships must be at least one tile long.
    InvalidShipLength,
    /// Tile already carries a hit result.
    AlreadyShot { x: usize, y: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => write!(f, "Tile ({}, {}) is off the board", x, y),
            BoardError::FleetDoesNotFit { length } => write!(
                f,
                "Can't fit a ship of length {} on the board; make ships smaller or fewer",
                length
            ),
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::AlreadyShot { x, y } => {
                write!(f, "Tile ({}, {}) has already been shot", x, y)
            }
        }
    }
}

/// Invariant violations raised by the targeting AI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Search requested with no untried coordinate left.
    NoMovesLeft,
    /// Attack produced no move and did not switch back to search.
    StalledAttack,
    /// A destroyed ship's length is not among the remaining ships.
    UnknownShipLength(usize),
    /// Opponent grid rejected the occupancy query.
    Board(BoardError),
}

impl From<BoardError> for AiError {
    fn from(err: BoardError) -> Self {
        AiError::Board(err)
    }
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoMovesLeft => write!(f, "AI has no untried moves left"),
            AiError::StalledAttack => write!(
                f,
                "AI could not find an attacking move and did not switch to search"
            ),
            AiError::UnknownShipLength(len) => {
                write!(f, "No undestroyed ship of length {} remains", len)
            }
            AiError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

/// Errors surfaced by a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Ai(AiError),
    /// A turn was requested after one side was cleared.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<AiError> for GameError {
    fn from(err: AiError) -> Self {
        GameError::Ai(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Ai(e) => write!(f, "AI error: {}", e),
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for AiError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
