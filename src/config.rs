use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::GridSize;
use crate::snake::STARTING_LENGTH;

const APP_DIR_NAME: &str = "level-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default board edge length in cells.
pub const DEFAULT_GRID_CELLS: u16 = 20;

/// Lives at the start of a session.
pub const DEFAULT_LIVES: u32 = 3;

/// Tick interval on level 1 in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Tick interval reduction applied on every level advance.
pub const DEFAULT_SPEED_STEP_MS: u64 = 15;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// How long the level objective banner stays up.
pub const OBJECTIVE_DISPLAY_MS: u64 = 2000;

/// How long the level-complete banner stays up.
pub const LEVEL_COMPLETE_DISPLAY_MS: u64 = 2000;

/// Smallest accepted board edge.
pub const MIN_GRID_CELLS: u16 = 6;

/// Largest accepted board edge.
pub const MAX_GRID_CELLS: u16 = 200;

/// Tunable rules for one run, loaded from JSON.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid: GridSize,
    pub lives: u32,
    pub base_tick_ms: u64,
    pub speed_step_ms: u64,
    pub min_tick_ms: u64,
    pub objective_display_ms: u64,
    pub level_complete_display_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::square(DEFAULT_GRID_CELLS),
            lives: DEFAULT_LIVES,
            base_tick_ms: DEFAULT_TICK_INTERVAL_MS,
            speed_step_ms: DEFAULT_SPEED_STEP_MS,
            min_tick_ms: MIN_TICK_INTERVAL_MS,
            objective_display_ms: OBJECTIVE_DISPLAY_MS,
            level_complete_display_ms: LEVEL_COMPLETE_DISPLAY_MS,
        }
    }
}

impl GameConfig {
    /// Returns the platform-correct default config file path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(CONFIG_FILE_NAME);
        base
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let path = Self::default_path();
                match Self::load_from_path(&path) {
                    Err(ConfigError::Io { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        Self::default()
                    }
                    other => other?,
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a configuration from JSON text without validating it.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Rejects values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width < MIN_GRID_CELLS || self.grid.height < MIN_GRID_CELLS {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} is smaller than {MIN_GRID_CELLS}x{MIN_GRID_CELLS}",
                self.grid.width, self.grid.height
            )));
        }

        if self.grid.width > MAX_GRID_CELLS || self.grid.height > MAX_GRID_CELLS {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} is larger than {MAX_GRID_CELLS}x{MAX_GRID_CELLS}",
                self.grid.width, self.grid.height
            )));
        }

        if usize::from(self.grid.width) < STARTING_LENGTH + 1 {
            return Err(ConfigError::Invalid(
                "grid is too narrow for the starting snake".to_owned(),
            ));
        }

        if self.lives == 0 {
            return Err(ConfigError::Invalid("lives must be at least 1".to_owned()));
        }

        if self.min_tick_ms == 0 || self.min_tick_ms > self.base_tick_ms {
            return Err(ConfigError::Invalid(format!(
                "min_tick_ms ({}) must be between 1 and base_tick_ms ({})",
                self.min_tick_ms, self.base_tick_ms
            )));
        }

        Ok(())
    }
}

/// Colors for one level's board and HUD.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Checkerboard light squares.
    pub grass_light: Color,
    /// Checkerboard dark squares.
    pub grass_dark: Color,
    pub obstacle: Color,
    pub fruit: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
    pub banner: Color,
    pub muted: Color,
}

/// Night meadow: dark grass and blood red fruit.
pub const THEME_NIGHT: Theme = Theme {
    name: "Night",
    grass_light: Color::Rgb(0, 50, 0),
    grass_dark: Color::Rgb(20, 20, 20),
    obstacle: Color::Rgb(80, 80, 80),
    fruit: Color::Rgb(139, 0, 0),
    snake_head: Color::White,
    snake_body: Color::Rgb(90, 140, 200),
    snake_tail: Color::Rgb(60, 90, 140),
    border_fg: Color::Rgb(80, 80, 80),
    border_bg: Color::Black,
    hud_text: Color::Rgb(220, 220, 220),
    banner: Color::Rgb(200, 200, 200),
    muted: Color::DarkGray,
};

/// Fog: grey-green swamp.
pub const THEME_FOG: Theme = Theme {
    name: "Fog",
    grass_light: Color::Rgb(40, 60, 50),
    grass_dark: Color::Rgb(28, 40, 34),
    obstacle: Color::Rgb(120, 120, 110),
    fruit: Color::Rgb(200, 40, 40),
    snake_head: Color::White,
    snake_body: Color::Rgb(150, 170, 90),
    snake_tail: Color::Rgb(100, 120, 60),
    border_fg: Color::Rgb(120, 120, 110),
    border_bg: Color::Black,
    hud_text: Color::Rgb(220, 220, 210),
    banner: Color::Rgb(230, 230, 200),
    muted: Color::DarkGray,
};

/// Crypt: cold stone.
pub const THEME_CRYPT: Theme = Theme {
    name: "Crypt",
    grass_light: Color::Rgb(45, 45, 60),
    grass_dark: Color::Rgb(30, 30, 42),
    obstacle: Color::Rgb(150, 150, 170),
    fruit: Color::Rgb(220, 60, 60),
    snake_head: Color::White,
    snake_body: Color::Rgb(170, 120, 200),
    snake_tail: Color::Rgb(110, 80, 140),
    border_fg: Color::Rgb(150, 150, 170),
    border_bg: Color::Black,
    hud_text: Color::Rgb(210, 210, 230),
    banner: Color::Rgb(230, 220, 255),
    muted: Color::DarkGray,
};

/// Inferno: the final level.
pub const THEME_INFERNO: Theme = Theme {
    name: "Inferno",
    grass_light: Color::Rgb(70, 20, 10),
    grass_dark: Color::Rgb(40, 10, 5),
    obstacle: Color::Rgb(30, 30, 30),
    fruit: Color::Rgb(255, 200, 0),
    snake_head: Color::White,
    snake_body: Color::Rgb(230, 120, 40),
    snake_tail: Color::Rgb(160, 70, 20),
    border_fg: Color::Rgb(230, 120, 40),
    border_bg: Color::Black,
    hud_text: Color::Rgb(255, 220, 200),
    banner: Color::Rgb(255, 230, 160),
    muted: Color::DarkGray,
};

/// Level themes in table order.
pub const THEMES: &[Theme] = &[THEME_NIGHT, THEME_FOG, THEME_CRYPT, THEME_INFERNO];

/// Returns the theme at `index`, wrapping past the end.
#[must_use]
pub fn theme_at(index: usize) -> &'static Theme {
    &THEMES[index % THEMES.len()]
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
