use serde::Deserialize;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a head that has just left the board can still be
/// represented and reported as a wall exit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// `Direction::Neutral` yields the same position.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `n` cells per side.
    #[must_use]
    pub const fn square(n: u16) -> Self {
        Self {
            width: n,
            height: n,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Converts a cell to the rectangle it covers on an output surface whose
    /// top-left cell starts at `origin` and where every cell is
    /// `cell_width` x `cell_height` units.
    ///
    /// Returns `None` for cells outside the grid.
    #[must_use]
    pub fn cell_rect(
        self,
        position: Position,
        origin: (u16, u16),
        cell_width: u16,
        cell_height: u16,
    ) -> Option<CellRect> {
        if !position.is_within_bounds(self) {
            return None;
        }

        let column = u16::try_from(position.x).ok()?;
        let row = u16::try_from(position.y).ok()?;

        Some(CellRect {
            x: origin.0.checked_add(column.checked_mul(cell_width)?)?,
            y: origin.1.checked_add(row.checked_mul(cell_height)?)?,
            width: cell_width,
            height: cell_height,
        })
    }
}

/// Rectangle covered by one grid cell on an output surface.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{CellRect, GridSize, Position};

    #[test]
    fn bounds_check_rejects_each_edge() {
        let bounds = GridSize::square(20);

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(19, 19).is_within_bounds(bounds));
        assert!(!Position::new(-1, 5).is_within_bounds(bounds));
        assert!(!Position::new(20, 5).is_within_bounds(bounds));
        assert!(!Position::new(5, -1).is_within_bounds(bounds));
        assert!(!Position::new(5, 20).is_within_bounds(bounds));
    }

    #[test]
    fn neutral_step_stays_in_place() {
        let start = Position::new(3, 4);

        assert_eq!(start.step(Direction::Neutral), start);
        assert_eq!(start.step(Direction::Up), Position::new(3, 3));
        assert_eq!(start.step(Direction::Right), Position::new(4, 4));
    }

    #[test]
    fn cell_rect_scales_and_offsets() {
        let bounds = GridSize::square(20);

        let rect = bounds.cell_rect(Position::new(3, 2), (1, 1), 2, 1);

        assert_eq!(
            rect,
            Some(CellRect {
                x: 7,
                y: 3,
                width: 2,
                height: 1,
            })
        );
        assert_eq!(bounds.cell_rect(Position::new(20, 0), (0, 0), 2, 1), None);
    }

    #[test]
    fn cells_covers_whole_grid() {
        let bounds = GridSize {
            width: 3,
            height: 2,
        };

        let cells: Vec<_> = bounds.cells().collect();

        assert_eq!(cells.len(), bounds.total_cells());
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[5], Position::new(2, 1));
    }
}
