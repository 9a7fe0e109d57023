//! Grid geometry and collaborator contracts.
//!
//! The action core never walks the battlefield itself; it asks a
//! [`GridOracle`] about layout and a [`Pathfinder`] for routes, and only
//! reasons about [`Cell`] coordinates and [`CompassDir`] facings.

mod oracle;
mod square;

pub use oracle::{ArcPath, GridOracle, Pathfinder};
pub use square::SquareGrid;

// ============================================================================
// Cell
// ============================================================================

/// A grid cell coordinate.
///
/// Coordinate system: Y-axis increases upward (north), X-axis increases
/// rightward (east).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring cell one step in `dir`.
    pub fn step(self, dir: CompassDir) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance: the number of king moves between two cells.
    pub fn chebyshev(self, other: Cell) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Squared Euclidean distance, used for tie-breaking approach cells.
    pub fn distance_sq(self, other: Cell) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// True when `other` is one of the 8 surrounding cells.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self != other && self.chebyshev(other) == 1
    }
}

// ============================================================================
// Compass Direction
// ============================================================================

/// One of the 8 compass facings, clockwise from North.
///
/// Rotation is always measured in 45-degree steps between these facings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDir {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDir {
    /// All 8 directions in clockwise order starting at North.
    pub const ALL: [CompassDir; 8] = [
        CompassDir::North,
        CompassDir::NorthEast,
        CompassDir::East,
        CompassDir::SouthEast,
        CompassDir::South,
        CompassDir::SouthWest,
        CompassDir::West,
        CompassDir::NorthWest,
    ];

    /// Returns the offset (dx, dy) for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            CompassDir::North => (0, 1),
            CompassDir::NorthEast => (1, 1),
            CompassDir::East => (1, 0),
            CompassDir::SouthEast => (1, -1),
            CompassDir::South => (0, -1),
            CompassDir::SouthWest => (-1, -1),
            CompassDir::West => (-1, 0),
            CompassDir::NorthWest => (-1, 1),
        }
    }

    /// Clockwise index, North = 0.
    pub fn index(self) -> u8 {
        match self {
            CompassDir::North => 0,
            CompassDir::NorthEast => 1,
            CompassDir::East => 2,
            CompassDir::SouthEast => 3,
            CompassDir::South => 4,
            CompassDir::SouthWest => 5,
            CompassDir::West => 6,
            CompassDir::NorthWest => 7,
        }
    }

    /// True for the four diagonal facings.
    pub fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }

    /// Minimal number of 45-degree steps to rotate from `self` to `other`.
    ///
    /// Symmetric, 0 for identity, at most 4 (a half turn).
    pub fn steps_to(self, other: CompassDir) -> u32 {
        let diff = (i32::from(self.index()) - i32::from(other.index())).rem_euclid(8) as u32;
        diff.min(8 - diff)
    }

    /// The facing that looks from `from` toward `to`, rounded to the
    /// dominant octant. `None` when the cells coincide.
    pub fn between(from: Cell, to: Cell) -> Option<CompassDir> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0 && dy == 0 {
            return None;
        }

        // A delta counts as axis-aligned when it is at least twice as long
        // on that axis; everything else rounds to a diagonal.
        let dir = if dx.abs() >= 2 * dy.abs() {
            if dx > 0 { CompassDir::East } else { CompassDir::West }
        } else if dy.abs() >= 2 * dx.abs() {
            if dy > 0 {
                CompassDir::North
            } else {
                CompassDir::South
            }
        } else {
            match (dx > 0, dy > 0) {
                (true, true) => CompassDir::NorthEast,
                (true, false) => CompassDir::SouthEast,
                (false, true) => CompassDir::NorthWest,
                (false, false) => CompassDir::SouthWest,
            }
        };
        Some(dir)
    }
}
