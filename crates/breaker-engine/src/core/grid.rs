//! Static cell store for a loaded level.
//!
//! Cells are keyed by `(column, row)`. The grid is built once per level load and is
//! read-only while the simulation runs, so it can be borrowed freely by every
//! resolver call within a tick.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;
use crate::error::LevelError;

/// Default edge length of a cell in world units.
pub const GRID_SIZE: i32 = 32;

/// Whether a tile blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Collide,
    NoCollide,
}

impl TileKind {
    /// Tag used in level text.
    pub fn tag(self) -> &'static str {
        match self {
            TileKind::Collide => "col",
            TileKind::NoCollide => "ncl",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "col" => Some(TileKind::Collide),
            "ncl" => Some(TileKind::NoCollide),
            _ => None,
        }
    }
}

/// A single tile of the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
    pub kind: TileKind,
    /// Tileset coordinates, if the tile is textured.
    #[serde(default)]
    pub texture: Option<(i32, i32)>,
}

impl Cell {
    pub fn new(column: i32, row: i32, kind: TileKind) -> Self {
        Self {
            column,
            row,
            kind,
            texture: None,
        }
    }

    pub fn solid(column: i32, row: i32) -> Self {
        Self::new(column, row, TileKind::Collide)
    }

    pub fn with_texture(mut self, tx: i32, ty: i32) -> Self {
        self.texture = Some((tx, ty));
        self
    }

    pub fn collidable(&self) -> bool {
        self.kind == TileKind::Collide
    }
}

/// Inclusive column/row range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min_col: i32,
    pub min_row: i32,
    pub max_col: i32,
    pub max_row: i32,
}

impl CellRange {
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= self.min_col && column <= self.max_col && row >= self.min_row && row <= self.max_row
    }
}

/// Lookup of cells by grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: HashMap<(i32, i32), Cell>,
    cell_size: i32,
}

impl Grid {
    /// An empty grid. Panics on a non-positive cell size; use [`Grid::from_cells`]
    /// for sizes read from configuration.
    pub fn empty(cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            cells: HashMap::new(),
            cell_size,
        }
    }

    /// Build a grid, rejecting a non-positive cell size and two cells at the same
    /// position.
    pub fn from_cells(
        cells: impl IntoIterator<Item = Cell>,
        cell_size: i32,
    ) -> Result<Self, LevelError> {
        if cell_size <= 0 {
            return Err(LevelError::BadCellSize(cell_size));
        }
        let mut grid = Self::empty(cell_size);
        for cell in cells {
            if grid.cells.contains_key(&(cell.column, cell.row)) {
                return Err(LevelError::DuplicateCell {
                    column: cell.column,
                    row: cell.row,
                });
            }
            grid.cells.insert((cell.column, cell.row), cell);
        }
        Ok(grid)
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn get(&self, column: i32, row: i32) -> Option<&Cell> {
        self.cells.get(&(column, row))
    }

    pub fn is_collidable(&self, column: i32, row: i32) -> bool {
        self.get(column, row).is_some_and(Cell::collidable)
    }

    /// World-space box covered by the cell at `(column, row)`.
    pub fn cell_bounds(&self, column: i32, row: i32) -> Rect {
        Rect::new(
            column * self.cell_size,
            row * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Cell containing a world-space point.
    pub fn world_to_cell(&self, pos: Vec2) -> (i32, i32) {
        let size = self.cell_size as f32;
        ((pos.x / size).floor() as i32, (pos.y / size).floor() as i32)
    }

    /// Range of cells a world-space box may touch. The far edges round up, so the
    /// range also covers the cells just past the box.
    pub fn cell_range(&self, area: &Rect) -> CellRange {
        let size = self.cell_size as f64;
        CellRange {
            min_col: (area.x() as f64 / size).floor() as i32,
            min_row: (area.y() as f64 / size).floor() as i32,
            max_col: (area.right() as f64 / size).ceil() as i32,
            max_row: (area.bottom() as f64 / size).ceil() as i32,
        }
    }

    /// Collidable cells within `range`, in row-major order.
    pub fn collidable_in(&self, range: CellRange) -> Vec<Cell> {
        let mut found = Vec::new();
        for row in range.min_row..=range.max_row {
            for column in range.min_col..=range.max_col {
                if let Some(cell) = self.get(column, row).filter(|c| c.collidable()) {
                    found.push(*cell);
                }
            }
        }
        found
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> Vec<&Cell> {
        let mut cells: Vec<&Cell> = self.cells.values().collect();
        cells.sort_by_key(|c| (c.row, c.column));
        cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_position_rejected() {
        let err = Grid::from_cells(
            [Cell::solid(1, 1), Cell::new(1, 1, TileKind::NoCollide)],
            GRID_SIZE,
        )
        .unwrap_err();
        assert_eq!(err, LevelError::DuplicateCell { column: 1, row: 1 });
    }

    #[test]
    fn non_positive_cell_size_rejected() {
        assert_eq!(
            Grid::from_cells([Cell::solid(0, 0)], 0).unwrap_err(),
            LevelError::BadCellSize(0)
        );
        assert_eq!(
            Grid::from_cells([], -32).unwrap_err(),
            LevelError::BadCellSize(-32)
        );
    }

    #[test]
    fn absent_cell_is_not_collidable() {
        let grid = Grid::from_cells([Cell::solid(0, 1)], GRID_SIZE).unwrap();
        assert!(grid.is_collidable(0, 1));
        assert!(!grid.is_collidable(0, 0));
        assert!(grid.get(5, 5).is_none());
    }

    #[test]
    fn pass_through_cells_are_stored_but_not_collidable() {
        let grid = Grid::from_cells([Cell::new(2, 2, TileKind::NoCollide)], GRID_SIZE).unwrap();
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_collidable(2, 2));
        assert!(grid.collidable_in(grid.cell_range(&Rect::new(0, 0, 128, 128))).is_empty());
    }

    #[test]
    fn cell_bounds_scale_by_size() {
        let grid = Grid::empty(GRID_SIZE);
        assert_eq!(grid.cell_bounds(0, 1), Rect::new(0, 32, 32, 32));
        assert_eq!(grid.cell_bounds(-1, 2), Rect::new(-32, 64, 32, 32));
    }

    #[test]
    fn range_rounds_far_edges_up() {
        let grid = Grid::empty(GRID_SIZE);
        let range = grid.cell_range(&Rect::new(7, 0, 18, 34));
        assert_eq!(
            range,
            CellRange {
                min_col: 0,
                min_row: 0,
                max_col: 1,
                max_row: 2,
            }
        );
    }

    #[test]
    fn range_floors_negative_coordinates() {
        let grid = Grid::empty(GRID_SIZE);
        let range = grid.cell_range(&Rect::new(-5, -40, 10, 10));
        assert_eq!(range.min_col, -1);
        assert_eq!(range.min_row, -2);
    }

    #[test]
    fn collidable_in_is_row_major() {
        let grid = Grid::from_cells(
            [Cell::solid(1, 1), Cell::solid(0, 1), Cell::solid(1, 0)],
            GRID_SIZE,
        )
        .unwrap();
        let range = CellRange {
            min_col: 0,
            min_row: 0,
            max_col: 1,
            max_row: 1,
        };
        let order: Vec<(i32, i32)> = grid
            .collidable_in(range)
            .iter()
            .map(|c| (c.column, c.row))
            .collect();
        assert_eq!(order, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn world_to_cell_floors() {
        let grid = Grid::empty(GRID_SIZE);
        assert_eq!(grid.world_to_cell(Vec2::new(33.0, 31.9)), (1, 0));
        assert_eq!(grid.world_to_cell(Vec2::new(-0.5, 0.0)), (-1, 0));
    }
}
