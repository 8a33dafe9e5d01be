use std::collections::HashSet;

use crate::grid::{GridSize, Position};
use crate::placement::{PlacementError, PlacementStrategy};

/// Points granted per fruit.
pub const FRUIT_POINTS: u32 = 1;

/// Fruit currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
    /// Reserved marker; carries no gameplay effect yet.
    pub special: bool,
}

impl Fruit {
    /// Creates a regular fruit at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            special: false,
        }
    }

    /// Spawns a regular fruit in a cell outside `excluded`.
    pub fn spawn<P: PlacementStrategy + ?Sized>(
        placer: &mut P,
        bounds: GridSize,
        excluded: &HashSet<Position>,
    ) -> Result<Self, PlacementError> {
        placer.place(bounds, excluded).map(Self::new)
    }
}

/// Static blocking cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Obstacle {
    pub position: Position,
}

impl Obstacle {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// Places up to `count` obstacles outside `excluded`, never stacking two on
/// one cell.
///
/// Stops early once the board has no free cell left; the shortfall is
/// reported through the returned error alongside the obstacles placed so far.
pub fn place_obstacles<P: PlacementStrategy + ?Sized>(
    placer: &mut P,
    bounds: GridSize,
    excluded: &HashSet<Position>,
    count: usize,
) -> (Vec<Obstacle>, Option<PlacementError>) {
    let mut blocked = excluded.clone();
    let mut obstacles = Vec::with_capacity(count);

    for _ in 0..count {
        match placer.place(bounds, &blocked) {
            Ok(position) => {
                blocked.insert(position);
                obstacles.push(Obstacle::new(position));
            }
            Err(error) => return (obstacles, Some(error)),
        }
    }

    (obstacles, None)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::grid::{GridSize, Position};
    use crate::placement::{PlacementError, RejectionSampler};

    use super::{Fruit, place_obstacles};

    #[test]
    fn fruit_spawn_never_overlaps_exclusions() {
        let bounds = GridSize::square(6);
        let excluded: HashSet<Position> = [
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(4, 4),
        ]
        .into_iter()
        .collect();
        let mut sampler = RejectionSampler::new_with_seed(5);

        for _ in 0..100 {
            let fruit = Fruit::spawn(&mut sampler, bounds, &excluded).expect("free cells remain");
            assert!(!excluded.contains(&fruit.position));
            assert!(!fruit.special);
        }
    }

    #[test]
    fn obstacles_are_distinct_and_avoid_exclusions() {
        let bounds = GridSize::square(5);
        let excluded: HashSet<Position> = (0..5).map(|x| Position::new(x, 2)).collect();
        let mut sampler = RejectionSampler::new_with_seed(9);

        let (obstacles, shortfall) = place_obstacles(&mut sampler, bounds, &excluded, 8);

        assert_eq!(shortfall, None);
        assert_eq!(obstacles.len(), 8);
        let cells: HashSet<Position> = obstacles.iter().map(|o| o.position).collect();
        assert_eq!(cells.len(), 8);
        assert!(cells.is_disjoint(&excluded));
    }

    #[test]
    fn obstacle_placement_stops_when_board_fills() {
        let bounds = GridSize::square(3);
        let excluded: HashSet<Position> = bounds.cells().skip(2).collect();
        let mut sampler = RejectionSampler::new_with_seed(2);

        let (obstacles, shortfall) = place_obstacles(&mut sampler, bounds, &excluded, 5);

        assert_eq!(obstacles.len(), 2);
        assert_eq!(
            shortfall,
            Some(PlacementError::BoardFull {
                width: 3,
                height: 3,
            })
        );
    }
}
