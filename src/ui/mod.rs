pub mod hud;
pub mod menu;
pub mod sprites;

use crate::canvas::{Canvas, Sprite, Swatch};
use crate::game::GameState;
use crate::grid::Position;
use crate::session::GameSession;

/// Draws one full frame: board, entities, HUD and the overlay for `state`.
pub fn draw_scene<C: Canvas + ?Sized>(canvas: &mut C, state: GameState, session: &GameSession) {
    draw_board(canvas, session);

    for obstacle in &session.obstacles {
        canvas.draw_rect(obstacle.position, Swatch::Obstacle);
    }

    canvas.draw_cell(
        session.fruit.position,
        Sprite::Fruit {
            special: session.fruit.special,
        },
    );

    let segments: Vec<Position> = session.snake.segments().copied().collect();
    let sprites = sprites::snake_sprites(&segments, session.snake.direction());
    for (segment, sprite) in segments.iter().zip(sprites).rev() {
        canvas.draw_cell(*segment, sprite);
    }

    hud::draw_hud(canvas, session);
    menu::draw_overlay(canvas, state, session);
}

fn draw_board<C: Canvas + ?Sized>(canvas: &mut C, session: &GameSession) {
    for cell in session.bounds().cells() {
        let swatch = if (cell.x + cell.y) % 2 == 0 {
            Swatch::GrassLight
        } else {
            Swatch::GrassDark
        };
        canvas.draw_rect(cell, swatch);
    }
}
