//! Space Scavenger - a shoot/dodge/collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning)
//! - `scoreboard`: Top-3 score list for the session
//! - `menu` / `game`: The two screens, each owning a frame loop
//! - `render`: Per-frame drawing of the playfield and HUD
//! - `assets` / `audio`: Sprite/sound loading and playback

pub mod assets;
pub mod audio;
pub mod game;
pub mod menu;
pub mod render;
pub mod scoreboard;
pub mod sim;
pub mod ui;

pub use scoreboard::ScoreBoard;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation timestep (the original game is paced at 60 FPS and
    /// all speeds below are in pixels per frame)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 50.0;
    pub const SHIP_START_X: f32 = 400.0;
    pub const SHIP_START_Y: f32 = 500.0;
    /// Horizontal ship speed (pixels per tick, either direction)
    pub const SHIP_SPEED: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    /// Upward bullet speed (pixels per tick)
    pub const BULLET_SPEED: f32 = 7.0;

    /// Asteroid defaults
    pub const INITIAL_ASTEROID_SPEED: f32 = 1.0;
    /// Asteroid speed increases by this amount...
    pub const SPEED_INCREASE_AMOUNT: f32 = 0.5;
    /// ...every this many ticks (3 seconds of session time)
    pub const SPEED_INCREASE_INTERVAL_TICKS: u64 = 180;
    /// Base asteroid side length; grows by 1px per 10 points of score
    pub const ASTEROID_BASE_SIZE: f32 = 30.0;
    pub const ASTEROID_SPAWN_Y: f32 = -50.0;
    pub const ASTEROID_SPAWN_X_MAX: i32 = 770;
    /// Per-tick Bernoulli trial probability for a new asteroid
    pub const ASTEROID_SPAWN_CHANCE: f64 = 0.05;

    /// Crystal defaults
    pub const CRYSTAL_SIZE: f32 = 20.0;
    /// Downward crystal speed (pixels per tick)
    pub const CRYSTAL_FALL_SPEED: f32 = 2.0;
    pub const CRYSTAL_SPAWN_Y: f32 = -30.0;
    pub const CRYSTAL_SPAWN_X_MAX: i32 = 780;
    /// Per-tick Bernoulli trial probability for a new crystal
    pub const CRYSTAL_SPAWN_CHANCE: f64 = 0.01;
}
