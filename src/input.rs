use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Canonical movement directions for snake input.
///
/// `Neutral` is the resting direction before the first move and after a
/// life is lost; the snake does not advance while neutral.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Neutral,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Neutral => Self::Neutral,
        }
    }

    /// Unit step on the grid as `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Neutral => (0, 0),
        }
    }

    /// Direction of a unit offset, if it is one.
    #[must_use]
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Any other key press; confirms menus and restarts after game over.
    Confirm,
    /// Primary mouse button pressed at a terminal cell.
    Click { column: u16, row: u16 },
    Quit,
}

/// Source of input events, drained once per frame.
pub trait InputSource {
    /// Returns every event that arrived since the previous poll, in order.
    fn poll(&mut self) -> io::Result<Vec<GameInput>>;
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != Direction::Neutral && next != current.opposite()
}

/// Maps a terminal key event to a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => GameInput::Direction(Direction::Right),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => GameInput::Confirm,
    };

    Some(input)
}

/// Maps a raw terminal event to a game input.
#[must_use]
pub fn map_event(event: Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(GameInput::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

/// Crossterm-backed input source.
#[derive(Debug)]
pub struct InputHandler {
    max_events_per_poll: usize,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_events_per_poll: 32,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for InputHandler {
    fn poll(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();

        while inputs.len() < self.max_events_per_poll && event::poll(Duration::ZERO)? {
            if let Some(input) = map_event(event::read()?) {
                inputs.push(input);
            }
        }

        Ok(inputs)
    }
}
