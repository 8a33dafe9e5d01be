use crate::canvas::{Canvas, TextAnchor, TextStyle};
use crate::session::GameSession;

/// Left HUD text: level, lives and XP.
#[must_use]
pub fn status_text(session: &GameSession) -> String {
    format!(
        "Lv {}  Lives {}  XP {}",
        session.progression.level, session.lives, session.progression.xp
    )
}

/// Right HUD text: score and progress towards the level goal.
#[must_use]
pub fn score_text(session: &GameSession) -> String {
    format!(
        "{}/{}  Score {}",
        session.progression.apples_collected, session.progression.apples_to_win, session.score
    )
}

/// Draws the single HUD row above the board.
///
/// The right side goes first so a narrow board truncates the left side.
pub fn draw_hud<C: Canvas + ?Sized>(canvas: &mut C, session: &GameSession) {
    canvas.draw_text(&score_text(session), TextAnchor::TopRight, TextStyle::Hud);
    canvas.draw_text(&status_text(session), TextAnchor::TopLeft, TextStyle::Hud);
}
