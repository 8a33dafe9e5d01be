use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::audio::AudioSink;
use crate::canvas::{BodyShape, Canvas, Sprite, Swatch, TextAnchor, TextStyle};
use crate::clock::Clock;
use crate::config::{BORDER_HALF_BLOCK, Theme};
use crate::game::Game;
use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Terminal columns per grid cell; two columns make cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Screen regions for the HUD and the bordered board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardLayout {
    pub hud: Rect,
    pub frame: Rect,
    pub inner: Rect,
}

/// Centers a bordered board for `bounds` with one HUD row above it.
///
/// Returns `None` when `area` is too small.
#[must_use]
pub fn board_layout(area: Rect, bounds: GridSize) -> Option<BoardLayout> {
    let frame_width = bounds.width.checked_mul(CELL_COLUMNS)?.checked_add(2)?;
    let frame_height = bounds.height.checked_add(2)?;
    let total_height = frame_height + 1;

    if frame_width > area.width || total_height > area.height {
        return None;
    }

    let x = area.x + (area.width - frame_width) / 2;
    let y = area.y + (area.height - total_height) / 2;
    let hud = Rect::new(x + 1, y, frame_width - 2, 1);
    let frame = Rect::new(x, y + 1, frame_width, frame_height);
    let inner = Rect::new(x + 1, y + 2, frame_width - 2, frame_height - 2);

    Some(BoardLayout { hud, frame, inner })
}

/// Renders the full game frame.
pub fn render<A: AudioSink, C: Clock>(frame: &mut Frame<'_>, game: &Game<A, C>) {
    let area = frame.area();
    let bounds = game.session().bounds();
    let theme = game.session().progression.theme();

    let Some(layout) = board_layout(area, bounds) else {
        render_too_small(frame.buffer_mut(), area, bounds);
        return;
    };

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    frame.render_widget(block, layout.frame);

    let mut canvas = FrameCanvas::new(frame.buffer_mut(), layout, bounds, theme);
    game.draw(&mut canvas);
}

fn render_too_small(buffer: &mut Buffer, area: Rect, bounds: GridSize) {
    let needed_width = u32::from(bounds.width) * u32::from(CELL_COLUMNS) + 2;
    let needed_height = u32::from(bounds.height) + 3;
    let message = format!("Terminal too small: need {needed_width}x{needed_height}");
    buffer.set_stringn(
        area.x,
        area.y,
        message,
        usize::from(area.width),
        Style::new().fg(Color::Red),
    );
}

/// [`Canvas`] backed by a ratatui buffer.
///
/// Right-aligned HUD text reserves its columns, so left-aligned text drawn
/// afterwards is cut short instead of running into it.
pub struct FrameCanvas<'a> {
    buffer: &'a mut Buffer,
    layout: BoardLayout,
    bounds: GridSize,
    theme: &'static Theme,
    hud_reserved: u16,
}

impl<'a> FrameCanvas<'a> {
    #[must_use]
    pub fn new(
        buffer: &'a mut Buffer,
        layout: BoardLayout,
        bounds: GridSize,
        theme: &'static Theme,
    ) -> Self {
        Self {
            buffer,
            layout,
            bounds,
            theme,
            hud_reserved: 0,
        }
    }

    fn cell_origin(&self, position: Position) -> Option<(u16, u16)> {
        let rect = self.bounds.cell_rect(
            position,
            (self.layout.inner.x, self.layout.inner.y),
            CELL_COLUMNS,
            1,
        )?;
        Some((rect.x, rect.y))
    }

    fn swatch_color(&self, swatch: Swatch) -> Color {
        match swatch {
            Swatch::GrassLight => self.theme.grass_light,
            Swatch::GrassDark => self.theme.grass_dark,
            Swatch::Obstacle => self.theme.obstacle,
        }
    }

    fn text_style(&self, style: TextStyle) -> Style {
        match style {
            TextStyle::Hud => Style::new().fg(self.theme.hud_text),
            TextStyle::Title => Style::new()
                .fg(self.theme.banner)
                .bg(self.theme.border_bg)
                .add_modifier(Modifier::BOLD),
            TextStyle::Banner => Style::new().fg(self.theme.banner).bg(self.theme.border_bg),
            TextStyle::Hint => Style::new().fg(self.theme.muted).bg(self.theme.border_bg),
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn draw_cell(&mut self, position: Position, sprite: Sprite) {
        let Some((x, y)) = self.cell_origin(position) else {
            return;
        };

        let (glyph, style) = sprite_look(sprite, self.theme);
        self.buffer.set_string(x, y, glyph, style);
    }

    fn draw_rect(&mut self, position: Position, swatch: Swatch) {
        let Some((x, y)) = self.cell_origin(position) else {
            return;
        };

        let style = Style::new().bg(self.swatch_color(swatch));
        self.buffer
            .set_string(x, y, " ".repeat(usize::from(CELL_COLUMNS)), style);
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, style: TextStyle) {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let (row, left, span) = match anchor {
            TextAnchor::TopLeft => {
                let hud = self.layout.hud;
                let span = hud.width.saturating_sub(self.hud_reserved);
                (hud.y, hud.x, span)
            }
            TextAnchor::TopRight => {
                let hud = self.layout.hud;
                let left = hud.right().saturating_sub(width).max(hud.x);
                // One blank column separates it from left-aligned text.
                self.hud_reserved = (hud.right() - left).saturating_add(1).min(hud.width);
                (hud.y, left, hud.width)
            }
            TextAnchor::Center { line } => {
                let inner = self.layout.inner;
                let middle = i32::from(inner.y) + i32::from(inner.height / 2) + i32::from(line);
                let row = middle.clamp(i32::from(inner.y), i32::from(inner.bottom()) - 1);
                let left = inner.x + inner.width.saturating_sub(width) / 2;
                (u16::try_from(row).unwrap_or(inner.y), left, inner.width)
            }
        };

        let style = self.text_style(style);
        self.buffer
            .set_stringn(left, row, text, usize::from(span), style);
    }
}

fn sprite_look(sprite: Sprite, theme: &Theme) -> (&'static str, Style) {
    let head = Style::new().fg(theme.snake_head).add_modifier(Modifier::BOLD);
    let body = Style::new().fg(theme.snake_body);
    let tail = Style::new().fg(theme.snake_tail);

    match sprite {
        Sprite::Head(Direction::Up) => ("▲ ", head),
        Sprite::Head(Direction::Down) => ("▼ ", head),
        Sprite::Head(Direction::Left) => ("◀━", head),
        Sprite::Head(Direction::Right) => ("▶ ", head),
        Sprite::Head(Direction::Neutral) => ("● ", head),
        Sprite::Tail(Direction::Up) => ("╻ ", tail),
        Sprite::Tail(Direction::Down) => ("╹ ", tail),
        Sprite::Tail(Direction::Left) => ("╺━", tail),
        Sprite::Tail(Direction::Right | Direction::Neutral) => ("╸ ", tail),
        Sprite::Body(BodyShape::Horizontal) => ("━━", body),
        Sprite::Body(BodyShape::Vertical) => ("┃ ", body),
        Sprite::Body(BodyShape::TopLeft) => ("┛ ", body),
        Sprite::Body(BodyShape::TopRight) => ("┗━", body),
        Sprite::Body(BodyShape::BottomLeft) => ("┓ ", body),
        Sprite::Body(BodyShape::BottomRight) => ("┏━", body),
        Sprite::Fruit { special: false } => ("● ", Style::new().fg(theme.fruit)),
        Sprite::Fruit { special: true } => ("★ ", Style::new().fg(theme.fruit)),
    }
}
