//! Game state and core simulation types
//!
//! Everything a session mutates lives here, including the seeded RNG that
//! drives spawn trials, so two sessions with the same seed and the same
//! input sequence play out identically.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active gameplay
    Playing,
    /// Ship was hit; terminal for the session
    GameOver,
}

/// One-shot events emitted by the simulation for the platform layer
/// (sound triggers). Appended by [`tick`](super::tick::tick), drained by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An asteroid overlapped the ship
    ShipHit,
    /// A crystal was collected
    CrystalCollected,
}

/// A moving rectangle with a scalar speed. Asteroids carry their fall speed
/// here; ship, bullets and crystals move at the fixed per-tick rates in
/// [`crate::consts`].
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    pub rect: Rect,
    pub speed: f32,
}

impl Entity {
    pub fn new(x: f32, y: f32, w: f32, h: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            speed,
        }
    }
}

/// Complete state of one play session
#[derive(Debug)]
pub struct GameState {
    pub phase: Phase,
    pub ship: Entity,
    pub asteroids: Vec<Entity>,
    pub crystals: Vec<Entity>,
    pub bullets: Vec<Entity>,
    pub score: u32,
    /// Current downward asteroid speed (pixels per tick)
    pub asteroid_speed: f32,
    /// Ticks elapsed since session start
    pub ticks: u64,
    /// Tick at which the speed was last increased
    pub last_speed_increase_tick: u64,
    /// Spawn-trial RNG, seeded per session
    pub rng: Pcg32,
    /// Events produced by ticks and not yet drained by the caller
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Playing,
            ship: Entity::new(SHIP_START_X, SHIP_START_Y, SHIP_SIZE, SHIP_SIZE, SHIP_SPEED),
            asteroids: Vec::new(),
            crystals: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            asteroid_speed: INITIAL_ASTEROID_SPEED,
            ticks: 0,
            last_speed_increase_tick: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Screen bounds used for clamping and off-screen culling.
    pub fn screen(&self) -> Rect {
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.asteroid_speed, INITIAL_ASTEROID_SPEED);
        assert!(state.asteroids.is_empty());
        assert!(state.crystals.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.ship.rect.x, SHIP_START_X);
        assert_eq!(state.ship.rect.y, SHIP_START_Y);
    }
}
