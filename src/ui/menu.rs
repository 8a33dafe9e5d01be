use crate::canvas::{Canvas, TextAnchor, TextStyle};
use crate::game::GameState;
use crate::session::GameSession;

const TAGLINE: &str = "The creature's hunger is insatiable...";

/// Draws the banner lines belonging to `state`.
pub fn draw_overlay<C: Canvas + ?Sized>(canvas: &mut C, state: GameState, session: &GameSession) {
    for (line, (text, style)) in (0_i16..).zip(overlay_lines(state, session)) {
        canvas.draw_text(&text, TextAnchor::Center { line: line - 1 }, style);
    }
}

/// Banner lines for `state`, top to bottom.
#[must_use]
pub fn overlay_lines(state: GameState, session: &GameSession) -> Vec<(String, TextStyle)> {
    match state {
        GameState::MainMenu => vec![
            ("SNAKE GAME".to_owned(), TextStyle::Title),
            (TAGLINE.to_owned(), TextStyle::Banner),
            (
                "[any key / click] Start   [Q] Quit".to_owned(),
                TextStyle::Hint,
            ),
        ],
        GameState::ShowingObjective => vec![(
            format!(
                "Level {}: Eat {} apples!",
                session.level(),
                session.progression.apples_to_win
            ),
            TextStyle::Banner,
        )],
        GameState::Playing if !session.has_moved() => vec![(
            "Steer with the arrow keys or WASD".to_owned(),
            TextStyle::Hint,
        )],
        GameState::Playing => Vec::new(),
        GameState::LevelComplete => vec![(
            format!("Level {} Completed! Continue...", session.level()),
            TextStyle::Banner,
        )],
        GameState::GameOver => {
            let cause = session
                .last_failure
                .map_or(String::new(), |reason| format!("You {}", reason.describe()));
            vec![
                ("GAME OVER".to_owned(), TextStyle::Title),
                (
                    format!("Score: {}  Level: {}", session.score, session.level()),
                    TextStyle::Banner,
                ),
                (cause, TextStyle::Hint),
                (
                    "[any key / click] Main menu   [Q] Quit".to_owned(),
                    TextStyle::Hint,
                ),
            ]
        }
    }
}
