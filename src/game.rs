use std::time::Duration;

use log::info;

use crate::audio::{AudioSink, SoundCue};
use crate::canvas::Canvas;
use crate::clock::Clock;
use crate::input::GameInput;
use crate::placement::PlacementError;
use crate::rules::{TickReport, Verdict};
use crate::session::GameSession;
use crate::ui;

/// Top-level screen the game is on. Exactly one is active.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameState {
    MainMenu,
    ShowingObjective,
    Playing,
    LevelComplete,
    GameOver,
}

/// State machine driving a [`GameSession`] from input, ticks and elapsed time.
#[derive(Debug)]
pub struct Game<A, C> {
    session: GameSession,
    state: GameState,
    entered_at_ms: u64,
    audio: A,
    clock: C,
}

impl<A: AudioSink, C: Clock> Game<A, C> {
    /// Starts on the main menu with `session` ready to play.
    pub fn new(session: GameSession, audio: A, clock: C) -> Self {
        let entered_at_ms = clock.now_ms();

        Self {
            session,
            state: GameState::MainMenu,
            entered_at_ms,
            audio,
            clock,
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Interval between simulation ticks at the current level.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.session.speed_ms())
    }

    /// Applies one player input.
    ///
    /// Input can steer while playing, start from the menu, or restart after
    /// game over. Everything else is ignored.
    pub fn handle_input(&mut self, input: GameInput) -> Result<(), PlacementError> {
        match (self.state, input) {
            (_, GameInput::Quit) => {}
            (GameState::MainMenu, _) => self.enter(GameState::ShowingObjective),
            (GameState::Playing, GameInput::Direction(direction)) => {
                self.session.set_direction(direction);
            }
            (GameState::GameOver, GameInput::Confirm | GameInput::Click { .. }) => {
                self.session.reset()?;
                self.enter(GameState::MainMenu);
            }
            _ => {}
        }

        Ok(())
    }

    /// Performs the transitions that are due purely to elapsed time.
    pub fn advance_timers(&mut self) -> Result<(), PlacementError> {
        let elapsed = self.clock.now_ms().saturating_sub(self.entered_at_ms);
        let config = *self.session.config();

        match self.state {
            GameState::ShowingObjective if elapsed >= config.objective_display_ms => {
                self.enter(GameState::Playing);
            }
            GameState::LevelComplete if elapsed >= config.level_complete_display_ms => {
                self.session.advance_level()?;
                self.enter(GameState::ShowingObjective);
            }
            _ => {}
        }

        Ok(())
    }

    /// Runs one simulation tick. Only the playing state simulates.
    pub fn tick(&mut self) -> Result<TickReport, PlacementError> {
        if self.state != GameState::Playing {
            return Ok(TickReport::idle());
        }

        let report = self.session.update()?;

        if report.ate_fruit {
            self.audio.play(SoundCue::Crunch);
        }

        match report.verdict {
            Verdict::Continue => {}
            Verdict::LevelComplete => {
                self.audio.play(SoundCue::LevelUp);
                self.enter(GameState::LevelComplete);
            }
            Verdict::LifeLost(_) => self.audio.play(SoundCue::LifeLost),
            Verdict::GameOver(_) => {
                self.audio.play(SoundCue::GameOver);
                self.enter(GameState::GameOver);
            }
        }

        Ok(report)
    }

    /// Renders the current frame through `canvas`.
    pub fn draw<K: Canvas + ?Sized>(&self, canvas: &mut K) {
        ui::draw_scene(canvas, self.state, &self.session);
    }

    fn enter(&mut self, state: GameState) {
        info!(
            "{:?} -> {:?} (level {}, score {}, lives {})",
            self.state,
            state,
            self.session.level(),
            self.session.score,
            self.session.lives
        );
        self.state = state;
        self.entered_at_ms = self.clock.now_ms();
    }
}
