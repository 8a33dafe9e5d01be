//! Level-based Snake: a tick-driven game state machine with lives,
//! obstacles and rising speed, rendered in the terminal.

pub mod audio;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod input;
pub mod level;
pub mod placement;
pub mod renderer;
pub mod rules;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
