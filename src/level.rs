use crate::config::{GameConfig, Theme, theme_at};

/// Highest level; completing it replays it at the next speed.
pub const MAX_LEVEL: u32 = 4;

/// Cosmetic XP granted for every completed level.
pub const XP_PER_LEVEL: u32 = 10;

/// Static goals and dressing for one level.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LevelPlan {
    pub apples_to_win: u32,
    pub obstacles: usize,
    pub theme: usize,
}

/// Level table, index 0 is level 1.
pub const LEVELS: [LevelPlan; MAX_LEVEL as usize] = [
    LevelPlan {
        apples_to_win: 10,
        obstacles: 0,
        theme: 0,
    },
    LevelPlan {
        apples_to_win: 15,
        obstacles: 2,
        theme: 1,
    },
    LevelPlan {
        apples_to_win: 20,
        obstacles: 4,
        theme: 2,
    },
    LevelPlan {
        apples_to_win: 25,
        obstacles: 5,
        theme: 3,
    },
];

/// Looks up the plan for `level`, clamped to `1..=MAX_LEVEL`.
#[must_use]
pub fn level_plan(level: u32) -> LevelPlan {
    let index = level.clamp(1, MAX_LEVEL) - 1;
    LEVELS[index as usize]
}

/// Apples needed to finish `level`.
#[must_use]
pub fn define_goals(level: u32) -> u32 {
    level_plan(level).apples_to_win
}

/// Tick interval after one more speed-up, never below `floor_ms`.
#[must_use]
pub fn increase_speed(current_ms: u64, step_ms: u64, floor_ms: u64) -> u64 {
    current_ms.saturating_sub(step_ms).max(floor_ms)
}

/// Level, goal and speed bookkeeping for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Progression {
    pub level: u32,
    pub apples_collected: u32,
    pub apples_to_win: u32,
    pub speed_ms: u64,
    pub xp: u32,
    speed_step_ms: u64,
    min_speed_ms: u64,
}

impl Progression {
    /// Level 1 at the configured base speed.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            level: 1,
            apples_collected: 0,
            apples_to_win: define_goals(1),
            speed_ms: config.base_tick_ms,
            xp: 0,
            speed_step_ms: config.speed_step_ms,
            min_speed_ms: config.min_tick_ms,
        }
    }

    /// Counts one eaten fruit. Returns true when this fruit meets the goal,
    /// in which case the level's XP is granted.
    pub fn record_fruit(&mut self) -> bool {
        self.apples_collected += 1;

        if self.apples_collected >= self.apples_to_win {
            self.xp += XP_PER_LEVEL;
            return true;
        }

        false
    }

    /// Moves to the next level: capped level number, fresh goal, faster tick.
    pub fn advance(&mut self) {
        self.level = (self.level + 1).min(MAX_LEVEL);
        self.apples_collected = 0;
        self.apples_to_win = define_goals(self.level);
        self.speed_ms = increase_speed(self.speed_ms, self.speed_step_ms, self.min_speed_ms);
    }

    /// Obstacles to place for the current level.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        level_plan(self.level).obstacles
    }

    /// Board theme for the current level.
    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        theme_at(level_plan(self.level).theme)
    }
}
