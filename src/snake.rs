use std::collections::VecDeque;

use crate::grid::{GridSize, Position};
use crate::input::{Direction, direction_change_is_valid};

/// Number of segments in a freshly spawned snake.
pub const STARTING_LENGTH: usize = 3;

/// Canonical starting body for `bounds`, head first, facing right.
///
/// On a 20x20 board this is `[(5,10), (4,10), (3,10)]`.
#[must_use]
pub fn starting_body(bounds: GridSize) -> Vec<Position> {
    let head_x = (i32::from(bounds.width) / 4).max(STARTING_LENGTH as i32 - 1);
    let y = i32::from(bounds.height) / 2;

    (0..STARTING_LENGTH as i32)
        .map(|offset| Position::new(head_x - offset, y))
        .collect()
}

/// Mutable snake state and movement buffering behavior.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    grow: bool,
}

impl Snake {
    /// Creates a neutral snake from explicit body segments (front is head).
    #[must_use]
    pub fn new(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction: Direction::Neutral,
            pending_direction: None,
            grow: false,
        }
    }

    /// Creates a snake already heading in `direction`.
    #[must_use]
    pub fn with_direction(segments: Vec<Position>, direction: Direction) -> Self {
        let mut snake = Self::new(segments);
        snake.direction = direction;
        snake
    }

    /// Creates the canonical starting snake for `bounds`.
    #[must_use]
    pub fn spawn(bounds: GridSize) -> Self {
        Self::new(starting_body(bounds))
    }

    /// Requests a new direction for the next tick.
    ///
    /// Reversing straight into the neck is ignored once the snake is longer
    /// than one segment, including from a neutral start. Several requests
    /// between ticks keep the last one. Returns whether the request was
    /// accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == Direction::Neutral {
            return false;
        }

        if let Some(neck) = self.body.get(1) {
            if !direction_change_is_valid(self.direction, direction)
                || self.head().step(direction) == *neck
            {
                return false;
            }
        }

        self.pending_direction = Some(direction);
        true
    }

    /// Queues growth on the next movement step.
    pub fn grow(&mut self) {
        self.grow = true;
    }

    /// Returns true when the next step will lengthen the snake.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.grow
    }

    /// Applies the buffered direction and advances one cell.
    ///
    /// Nothing moves while the direction is neutral.
    pub fn step(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        if self.direction == Direction::Neutral {
            return;
        }

        let next_head = self.head().step(self.direction);
        self.body.push_front(next_head);
        if !self.grow {
            let _ = self.body.pop_back();
        }
        self.grow = false;
    }

    /// Returns the head position the next [`Snake::step`] will produce, or
    /// `None` when the snake would stay put.
    #[must_use]
    pub fn next_head(&self) -> Option<Position> {
        let direction = self.pending_direction.unwrap_or(self.direction);
        (direction != Direction::Neutral).then(|| self.head().step(direction))
    }

    /// Stops the snake where it is; the body is kept.
    pub fn halt(&mut self) {
        self.direction = Direction::Neutral;
        self.pending_direction = None;
        self.grow = false;
    }

    /// Restores the canonical starting body for `bounds` and a neutral
    /// direction.
    pub fn reset(&mut self, bounds: GridSize) {
        self.body = VecDeque::from(starting_body(bounds));
        self.direction = Direction::Neutral;
        self.pending_direction = None;
        self.grow = false;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if any non-head segment occupies `position`.
    #[must_use]
    pub fn body_occupies(&self, position: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        self.body_occupies(self.head())
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction applied on the last step.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;

    use super::{Snake, starting_body};

    fn straight_right() -> Snake {
        Snake::with_direction(
            vec![
                Position::new(5, 10),
                Position::new(4, 10),
                Position::new(3, 10),
            ],
            Direction::Right,
        )
    }

    #[test]
    fn starting_body_matches_classic_board() {
        assert_eq!(
            starting_body(GridSize::square(20)),
            vec![
                Position::new(5, 10),
                Position::new(4, 10),
                Position::new(3, 10),
            ]
        );
    }

    #[test]
    fn starting_body_fits_small_boards() {
        let bounds = GridSize {
            width: 6,
            height: 6,
        };

        assert!(
            starting_body(bounds)
                .iter()
                .all(|segment| segment.is_within_bounds(bounds))
        );
    }

    #[test]
    fn snake_moves_one_cell_per_step() {
        let mut snake = straight_right();

        snake.step();

        assert_eq!(snake.head(), Position::new(6, 10));
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position::new(3, 10)));
    }

    #[test]
    fn neutral_snake_does_not_move() {
        let mut snake = Snake::spawn(GridSize::square(20));

        snake.step();
        snake.step();

        assert_eq!(snake.head(), Position::new(5, 10));
        assert_eq!(snake.direction(), Direction::Neutral);
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = straight_right();

        snake.grow();
        snake.step();

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position::new(3, 10)));
        assert!(!snake.is_growing());

        snake.step();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn reverse_direction_is_rejected() {
        let mut snake = straight_right();

        assert!(!snake.set_direction(Direction::Left));
        snake.step();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Position::new(6, 10));
    }

    #[test]
    fn neutral_snake_cannot_turn_into_its_neck() {
        let mut snake = Snake::spawn(GridSize::square(20));

        assert!(!snake.set_direction(Direction::Left));
        assert!(snake.set_direction(Direction::Up));
    }

    #[test]
    fn single_segment_snake_may_reverse() {
        let mut snake = Snake::with_direction(vec![Position::new(4, 4)], Direction::Up);

        assert!(snake.set_direction(Direction::Down));
        snake.step();

        assert_eq!(snake.head(), Position::new(4, 5));
    }

    #[test]
    fn last_direction_request_between_ticks_wins() {
        let mut snake = straight_right();

        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Down);
        snake.step();

        assert_eq!(snake.head(), Position::new(5, 11));
    }

    #[test]
    fn pending_direction_is_not_applied_before_step() {
        let mut snake = straight_right();

        snake.set_direction(Direction::Up);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.next_head(), Some(Position::new(5, 9)));
    }

    #[test]
    fn neutral_request_is_ignored() {
        let mut snake = straight_right();

        assert!(!snake.set_direction(Direction::Neutral));
        assert_eq!(snake.next_head(), Some(Position::new(6, 10)));
    }

    #[test]
    fn reset_restores_starting_body() {
        let bounds = GridSize::square(20);
        let mut snake = Snake::with_direction(
            vec![
                Position::new(12, 3),
                Position::new(12, 4),
                Position::new(12, 5),
                Position::new(12, 6),
            ],
            Direction::Up,
        );
        snake.set_direction(Direction::Left);
        snake.grow();
        snake.step();

        snake.reset(bounds);

        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            starting_body(bounds)
        );
        assert_eq!(snake.direction(), Direction::Neutral);
        assert_eq!(snake.next_head(), None);
        assert!(!snake.is_growing());
    }

    #[test]
    fn halt_keeps_body_and_stops_movement() {
        let mut snake = straight_right();
        snake.grow();
        snake.step();

        snake.halt();
        snake.step();

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 10));
        assert_eq!(snake.direction(), Direction::Neutral);
    }

    #[test]
    fn head_overlap_detects_self_collision() {
        let mut snake = Snake::with_direction(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Right,
        );

        snake.set_direction(Direction::Down);
        snake.step();

        assert!(snake.head_overlaps_body());
    }
}
