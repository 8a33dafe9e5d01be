use crate::grid::Position;
use crate::input::Direction;

/// Shape of a body segment, named after the sides it connects.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BodyShape {
    Horizontal,
    Vertical,
    /// Connects left and up.
    TopLeft,
    /// Connects right and up.
    TopRight,
    /// Connects left and down.
    BottomLeft,
    /// Connects right and down.
    BottomRight,
}

/// Sprite drawn into one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Sprite {
    /// Head facing the way it travels.
    Head(Direction),
    /// Tail pointing away from the body.
    Tail(Direction),
    Body(BodyShape),
    Fruit { special: bool },
}

/// Flat fills for board cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Swatch {
    GrassLight,
    GrassDark,
    Obstacle,
}

/// Text roles; the backend picks colors and weight.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextStyle {
    Hud,
    Title,
    Banner,
    Hint,
}

/// Where a line of text goes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextAnchor {
    /// HUD row, left aligned.
    TopLeft,
    /// HUD row, right aligned.
    TopRight,
    /// Centered on the board, `line` rows from its middle.
    Center { line: i16 },
}

/// Drawing surface the game renders through.
pub trait Canvas {
    fn draw_cell(&mut self, position: Position, sprite: Sprite);
    fn draw_rect(&mut self, position: Position, swatch: Swatch);
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, style: TextStyle);
}

/// One recorded canvas call.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DrawCall {
    Cell(Position, Sprite),
    Rect(Position, Swatch),
    Text(String, TextAnchor, TextStyle),
}

/// Canvas that remembers calls instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Sprite drawn at `position`, if any.
    #[must_use]
    pub fn sprite_at(&self, position: Position) -> Option<Sprite> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Cell(at, sprite) if *at == position => Some(*sprite),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_cell(&mut self, position: Position, sprite: Sprite) {
        self.calls.push(DrawCall::Cell(position, sprite));
    }

    fn draw_rect(&mut self, position: Position, swatch: Swatch) {
        self.calls.push(DrawCall::Rect(position, swatch));
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, style: TextStyle) {
        self.calls.push(DrawCall::Text(text.to_owned(), anchor, style));
    }
}
