use std::collections::HashSet;

use log::{info, warn};

use crate::config::GameConfig;
use crate::fruit::{Fruit, Obstacle, place_obstacles};
use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::level::Progression;
use crate::placement::{PlacementError, RejectionSampler};
use crate::rules::{self, FailReason, TickReport, Verdict};
use crate::snake::{Snake, starting_body};

/// Complete mutable state for one play session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub fruit: Fruit,
    pub obstacles: Vec<Obstacle>,
    pub lives: u32,
    pub score: u32,
    pub progression: Progression,
    pub last_failure: Option<FailReason>,
    has_moved: bool,
    config: GameConfig,
    placer: RejectionSampler,
}

impl GameSession {
    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, PlacementError> {
        Self::with_placer(config, RejectionSampler::new_with_seed(seed))
    }

    /// Creates a fresh level-1 session drawing cells from `placer`.
    pub fn with_placer(
        config: GameConfig,
        mut placer: RejectionSampler,
    ) -> Result<Self, PlacementError> {
        let snake = Snake::spawn(config.grid);
        let occupied: HashSet<Position> = snake.segments().copied().collect();
        let fruit = Fruit::spawn(&mut placer, config.grid, &occupied)?;

        Ok(Self {
            snake,
            fruit,
            obstacles: Vec::new(),
            lives: config.lives,
            score: 0,
            progression: Progression::new(&config),
            last_failure: None,
            has_moved: false,
            config,
            placer,
        })
    }

    /// Reinitializes everything for a new game, keeping the random stream.
    pub fn reset(&mut self) -> Result<(), PlacementError> {
        self.snake = Snake::spawn(self.config.grid);
        self.obstacles.clear();
        self.lives = self.config.lives;
        self.score = 0;
        self.progression = Progression::new(&self.config);
        self.last_failure = None;
        self.has_moved = false;
        self.respawn_fruit()
    }

    /// Returns the board size.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.progression.speed_ms
    }

    /// Current level number, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.progression.level
    }

    /// True once the player has steered since the last (re)spawn.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Forwards a steering request; the first accepted one releases the
    /// snake.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.snake.set_direction(direction) {
            self.has_moved = true;
        }
    }

    /// Advances one simulation tick: movement, then the rules.
    ///
    /// Does nothing until the player has steered, or after game over.
    pub fn update(&mut self) -> Result<TickReport, PlacementError> {
        if self.is_game_over() || !self.has_moved {
            return Ok(TickReport::idle());
        }

        if self.snake.next_head() == Some(self.fruit.position) {
            self.snake.grow();
        }
        self.snake.step();

        rules::resolve(self)
    }

    /// Spends one life. With lives left the snake goes back to the canonical
    /// starting body and waits for input; score, level and obstacles stay.
    pub fn lose_life(&mut self, reason: FailReason) -> Result<Verdict, PlacementError> {
        self.lives = self.lives.saturating_sub(1);
        self.last_failure = Some(reason);
        info!("life lost: {} ({} left)", reason.describe(), self.lives);

        if self.is_game_over() {
            return Ok(Verdict::GameOver(reason));
        }

        self.reset_snake();
        if self.snake.occupies(self.fruit.position) {
            self.respawn_fruit()?;
        }

        Ok(Verdict::LifeLost(reason))
    }

    /// Moves on to the next level.
    ///
    /// The snake keeps its body but stops until steered again. Obstacles and
    /// fruit are re-placed around it.
    pub fn advance_level(&mut self) -> Result<(), PlacementError> {
        self.progression.advance();
        self.snake.halt();
        self.has_moved = false;

        self.replace_obstacles();
        self.respawn_fruit()?;

        info!(
            "level {} started: {} apples to win, {} obstacles, tick {} ms",
            self.progression.level,
            self.progression.apples_to_win,
            self.obstacles.len(),
            self.progression.speed_ms
        );
        Ok(())
    }

    /// Places a new fruit away from the snake and obstacles.
    pub(crate) fn respawn_fruit(&mut self) -> Result<(), PlacementError> {
        let occupied = self.occupied_cells();
        self.fruit = Fruit::spawn(&mut self.placer, self.config.grid, &occupied)?;
        Ok(())
    }

    fn reset_snake(&mut self) {
        self.snake.reset(self.config.grid);
        self.has_moved = false;
    }

    fn replace_obstacles(&mut self) {
        let home = starting_body(self.config.grid);
        let mut keep_clear: HashSet<Position> = self.snake.segments().copied().collect();
        keep_clear.extend(home.iter().copied());
        for head in [self.snake.head(), home[0]] {
            for direction in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ] {
                keep_clear.insert(head.step(direction));
            }
        }

        let wanted = self.progression.obstacle_count();
        let (obstacles, shortfall) =
            place_obstacles(&mut self.placer, self.config.grid, &keep_clear, wanted);
        if let Some(error) = shortfall {
            warn!(
                "placed {} of {wanted} obstacles: {error}",
                obstacles.len()
            );
        }
        self.obstacles = obstacles;
    }

    fn occupied_cells(&self) -> HashSet<Position> {
        self.snake
            .segments()
            .copied()
            .chain(self.obstacles.iter().map(|obstacle| obstacle.position))
            .collect()
    }
}
