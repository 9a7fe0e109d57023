//! A rectangular battlefield with per-cell walkability.
//!
//! `SquareGrid` is the in-crate [`GridOracle`] + [`Pathfinder`] pair: enough
//! for the turn driver and tests to run without an engine-side navigation
//! mesh. The path routine walks the straight line between cells (diagonal
//! first), which matches how step costs are priced.

use super::{ArcPath, Cell, GridOracle, Pathfinder};

/// Rectangular grid with blocked-cell terrain and optional void cells.
///
/// Blocked cells exist but cannot be stood on; void cells are cut out of
/// the battlefield entirely, which is how irregular map edges are shaped.
#[derive(Clone, Debug)]
pub struct SquareGrid {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
    void: Vec<bool>,
}

impl SquareGrid {
    /// Creates an open grid of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            blocked: vec![false; cells],
            void: vec![false; cells],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Marks a cell as impassable terrain. Out-of-bounds cells are ignored.
    pub fn block(&mut self, cell: Cell) {
        if let Some(idx) = self.index(cell) {
            self.blocked[idx] = true;
        }
    }

    /// Removes a cell from the battlefield entirely.
    pub fn carve_void(&mut self, cell: Cell) {
        if let Some(idx) = self.index(cell) {
            self.void[idx] = true;
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width as i32 || cell.y >= self.height as i32 {
            return None;
        }
        Some((cell.y as u32 * self.width + cell.x as u32) as usize)
    }

    /// Straight-line walk from `start` to `end`: steps diagonally while both
    /// axes differ, then along the remaining axis.
    fn line_cells(start: Cell, end: Cell) -> Vec<Cell> {
        let mut cells = Vec::new();
        let mut cur = start;
        while cur != end {
            let dx = (end.x - cur.x).signum();
            let dy = (end.y - cur.y).signum();
            cur = Cell::new(cur.x + dx, cur.y + dy);
            cells.push(cur);
        }
        cells
    }
}

impl GridOracle for SquareGrid {
    fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|idx| !self.void[idx])
    }

    fn is_walkable(&self, cell: Cell) -> bool {
        self.index(cell)
            .is_some_and(|idx| !self.void[idx] && !self.blocked[idx])
    }
}

impl Pathfinder for SquareGrid {
    fn find_path(&self, start: Cell, end: Cell) -> Vec<Cell> {
        if start == end || !self.is_walkable(end) {
            return Vec::new();
        }
        let cells = Self::line_cells(start, end);
        if cells.iter().all(|&c| self.is_walkable(c)) {
            cells
        } else {
            Vec::new()
        }
    }

    fn arc_path(&self, start: Cell, end: Cell) -> Option<ArcPath> {
        if start == end || !self.contains(end) {
            return None;
        }
        let cells = Self::line_cells(start, end);

        // Parabolic height profile over the straight line; apex scales with
        // throw distance so long lobs clear intervening actors.
        let n = cells.len();
        let apex = 1.0 + n as f32 * 0.25;
        let points = (0..=n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let cell = if i == 0 { start } else { cells[i - 1] };
                let height = apex * 4.0 * t * (1.0 - t);
                [cell.x as f32, height, cell.y as f32]
            })
            .collect();

        Some(ArcPath { cells, points })
    }
}
