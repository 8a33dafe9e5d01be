use crate::canvas::{BodyShape, Sprite};
use crate::grid::Position;
use crate::input::Direction;

/// Picks the sprite for every segment, head first.
#[must_use]
pub fn snake_sprites(segments: &[Position], heading: Direction) -> Vec<Sprite> {
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            if index == 0 {
                let facing = segments
                    .get(1)
                    .and_then(|neck| direction_between(*neck, *segment))
                    .unwrap_or(heading);
                Sprite::Head(facing)
            } else if index == last {
                let pointing = direction_between(segments[index - 1], *segment)
                    .unwrap_or(Direction::Neutral);
                Sprite::Tail(pointing)
            } else {
                Sprite::Body(body_shape(segments[index + 1], *segment, segments[index - 1]))
            }
        })
        .collect()
}

/// Shape of a segment from its neighbours towards the tail and the head.
#[must_use]
pub fn body_shape(previous: Position, segment: Position, next: Position) -> BodyShape {
    let to_previous = (previous.x - segment.x, previous.y - segment.y);
    let to_next = (next.x - segment.x, next.y - segment.y);

    if to_previous.0 == to_next.0 {
        return BodyShape::Vertical;
    }
    if to_previous.1 == to_next.1 {
        return BodyShape::Horizontal;
    }

    let connects = |side: (i32, i32)| to_previous == side || to_next == side;
    match (connects((-1, 0)), connects((0, -1))) {
        (true, true) => BodyShape::TopLeft,
        (true, false) => BodyShape::BottomLeft,
        (false, true) => BodyShape::TopRight,
        (false, false) => BodyShape::BottomRight,
    }
}

fn direction_between(from: Position, to: Position) -> Option<Direction> {
    Direction::from_delta(to.x - from.x, to.y - from.y)
}

#[cfg(test)]
mod tests {
    use crate::canvas::{BodyShape, Sprite};
    use crate::grid::Position;
    use crate::input::Direction;

    use super::{body_shape, snake_sprites};

    #[test]
    fn straight_snake_uses_oriented_head_and_tail() {
        let segments = [
            Position::new(5, 10),
            Position::new(4, 10),
            Position::new(3, 10),
        ];

        let sprites = snake_sprites(&segments, Direction::Neutral);

        assert_eq!(
            sprites,
            vec![
                Sprite::Head(Direction::Right),
                Sprite::Body(BodyShape::Horizontal),
                Sprite::Tail(Direction::Left),
            ]
        );
    }

    #[test]
    fn vertical_segment_is_detected() {
        let shape = body_shape(
            Position::new(2, 3),
            Position::new(2, 2),
            Position::new(2, 1),
        );

        assert_eq!(shape, BodyShape::Vertical);
    }

    #[test]
    fn corners_name_the_connected_sides() {
        let centre = Position::new(5, 5);
        let left = Position::new(4, 5);
        let right = Position::new(6, 5);
        let up = Position::new(5, 4);
        let down = Position::new(5, 6);

        assert_eq!(body_shape(left, centre, up), BodyShape::TopLeft);
        assert_eq!(body_shape(up, centre, left), BodyShape::TopLeft);
        assert_eq!(body_shape(left, centre, down), BodyShape::BottomLeft);
        assert_eq!(body_shape(right, centre, up), BodyShape::TopRight);
        assert_eq!(body_shape(down, centre, right), BodyShape::BottomRight);
    }

    #[test]
    fn lone_head_uses_heading() {
        let sprites = snake_sprites(&[Position::new(1, 1)], Direction::Up);

        assert_eq!(sprites, vec![Sprite::Head(Direction::Up)]);
    }
}
