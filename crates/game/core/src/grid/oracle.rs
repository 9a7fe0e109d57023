//! Collaborator traits for battlefield layout and routing.

use super::{Cell, CompassDir};

/// Read-only layout oracle the action core validates against.
///
/// Implementations answer purely geometric questions: bounds, walkability,
/// neighborhoods and range queries. Occupancy is dynamic state and lives on
/// [`crate::state::CombatState`], not here.
pub trait GridOracle: Send + Sync {
    /// True when the cell exists on the battlefield.
    fn contains(&self, cell: Cell) -> bool;

    /// True when an actor could stand on the cell (bounds + terrain).
    fn is_walkable(&self, cell: Cell) -> bool;

    /// The neighboring cell one step in `dir`, if it exists on the grid.
    fn cell_in_direction(&self, cell: Cell, dir: CompassDir) -> Option<Cell> {
        let next = cell.step(dir);
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbors of `cell`, in clockwise order starting at North.
    fn neighbors(&self, cell: Cell, diagonals: bool) -> Vec<Cell> {
        CompassDir::ALL
            .into_iter()
            .filter(|d| diagonals || !d.is_diagonal())
            .filter_map(|d| self.cell_in_direction(cell, d))
            .collect()
    }

    /// All in-bounds cells within `radius` king moves of `center`,
    /// including the center itself. Deterministic row-major order.
    fn cells_in_range(&self, center: Cell, radius: u32) -> Vec<Cell> {
        let r = radius as i32;
        let mut cells = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                let cell = Cell::new(center.x + dx, center.y + dy);
                if self.contains(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

/// A thrown-object trajectory: the cells it crosses plus the world-space
/// points a presentation layer can tween along.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcPath {
    /// Cells the trajectory passes over, excluding the start cell.
    pub cells: Vec<Cell>,
    /// World-space sample points (x, height, z) along the arc.
    pub points: Vec<[f32; 3]>,
}

/// Routing oracle used by movement and throw validation.
pub trait Pathfinder: Send + Sync {
    /// Walkable route from `start` to `end`, excluding `start` itself.
    /// Empty when no route exists.
    fn find_path(&self, start: Cell, end: Cell) -> Vec<Cell>;

    /// Ballistic trajectory for thrown objects. `None` when the throw is
    /// not possible (blocked, off-grid target).
    fn arc_path(&self, start: Cell, end: Cell) -> Option<ArcPath>;
}
