use crate::fruit::{FRUIT_POINTS, Obstacle};
use crate::grid::GridSize;
use crate::placement::PlacementError;
use crate::session::GameSession;
use crate::snake::Snake;

/// Why a life was lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FailReason {
    Wall,
    SelfCollision,
    Obstacle,
}

impl FailReason {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Wall => "hit the wall",
            Self::SelfCollision => "bit yourself",
            Self::Obstacle => "hit an obstacle",
        }
    }
}

/// Outcome of one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Verdict {
    /// Nothing changed state; keep playing.
    Continue,
    /// The fruit that met the level goal was eaten.
    LevelComplete,
    /// A life was lost and the snake was reset.
    LifeLost(FailReason),
    /// The last life was lost.
    GameOver(FailReason),
}

/// What happened during a tick, for feedback and logging.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickReport {
    pub moved: bool,
    pub ate_fruit: bool,
    pub verdict: Verdict,
}

impl TickReport {
    /// Tick on which the snake did not move.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            moved: false,
            ate_fruit: false,
            verdict: Verdict::Continue,
        }
    }
}

/// Returns the first failure the head is in, checking walls, then the
/// body, then obstacles.
#[must_use]
pub fn detect_failure(snake: &Snake, obstacles: &[Obstacle], bounds: GridSize) -> Option<FailReason> {
    let head = snake.head();

    if !head.is_within_bounds(bounds) {
        return Some(FailReason::Wall);
    }

    if snake.head_overlaps_body() {
        return Some(FailReason::SelfCollision);
    }

    if obstacles.iter().any(|obstacle| obstacle.position == head) {
        return Some(FailReason::Obstacle);
    }

    None
}

/// Applies fruit, goal and failure rules after the snake has moved.
///
/// Eating the goal fruit completes the level and skips the failure checks
/// for that tick. At most one life is lost per tick.
pub fn resolve(session: &mut GameSession) -> Result<TickReport, PlacementError> {
    let mut report = TickReport {
        moved: true,
        ate_fruit: false,
        verdict: Verdict::Continue,
    };

    if session.snake.head() == session.fruit.position {
        report.ate_fruit = true;
        session.score += FRUIT_POINTS;

        if session.progression.record_fruit() {
            report.verdict = Verdict::LevelComplete;
            return Ok(report);
        }

        session.respawn_fruit()?;
    }

    if session.snake.body_occupies(session.fruit.position) {
        session.respawn_fruit()?;
    }

    if let Some(reason) = detect_failure(&session.snake, &session.obstacles, session.bounds()) {
        report.verdict = session.lose_life(reason)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use crate::fruit::Obstacle;
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{FailReason, detect_failure};

    fn snake_at(head: Position, direction: Direction) -> Snake {
        let (dx, dy) = direction.delta();
        Snake::with_direction(
            vec![
                head,
                Position::new(head.x - dx, head.y - dy),
                Position::new(head.x - 2 * dx, head.y - 2 * dy),
            ],
            direction,
        )
    }

    #[test]
    fn every_wall_is_detected() {
        let bounds = GridSize::square(10);

        for head in [
            Position::new(-1, 4),
            Position::new(10, 4),
            Position::new(4, -1),
            Position::new(4, 10),
        ] {
            let snake = snake_at(head, Direction::Right);
            assert_eq!(detect_failure(&snake, &[], bounds), Some(FailReason::Wall));
        }
    }

    #[test]
    fn obstacle_under_head_is_detected() {
        let snake = snake_at(Position::new(4, 4), Direction::Right);
        let obstacles = [Obstacle::new(Position::new(4, 4))];

        assert_eq!(
            detect_failure(&snake, &obstacles, GridSize::square(10)),
            Some(FailReason::Obstacle)
        );
    }

    #[test]
    fn free_head_has_no_failure() {
        let snake = snake_at(Position::new(4, 4), Direction::Right);
        let obstacles = [Obstacle::new(Position::new(7, 7))];

        assert_eq!(detect_failure(&snake, &obstacles, GridSize::square(10)), None);
    }

    #[test]
    fn self_overlap_is_detected() {
        let snake = Snake::with_direction(
            vec![
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
                Position::new(2, 2),
            ],
            Direction::Up,
        );

        assert_eq!(
            detect_failure(&snake, &[], GridSize::square(10)),
            Some(FailReason::SelfCollision)
        );
    }
}
