//! Per-frame simulation step
//!
//! Advances a session by exactly one 60 Hz frame. Order matters and matches
//! the gameplay contract: fire, speed-up check, ship movement, bullets,
//! asteroids, crystals, spawn trials. Collection passes drain into a fresh
//! Vec so removals never skip or double-process a neighbor.

use rand::Rng;

use super::state::{Entity, GameEvent, GameState, Phase};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held steering direction: -1 left, 0 none, 1 right
    pub steer: i32,
    /// Fire a bullet this tick (edge-triggered by the caller)
    pub fire: bool,
}

/// Advance the session by one frame.
///
/// A `GameOver` session is frozen: the tick is a no-op. The frame that
/// detects the fatal asteroid overlap still completes in full, so crystals
/// are collected and spawn trials run on that final frame.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == Phase::GameOver {
        return;
    }
    state.ticks += 1;

    // Fire first: the new bullet advances on the same frame it appears.
    if input.fire {
        state.bullets.push(Entity::new(
            state.ship.rect.center_x() - BULLET_WIDTH / 2.0,
            state.ship.rect.top(),
            BULLET_WIDTH,
            BULLET_HEIGHT,
            BULLET_SPEED,
        ));
    }

    if state.ticks - state.last_speed_increase_tick >= SPEED_INCREASE_INTERVAL_TICKS {
        state.asteroid_speed += SPEED_INCREASE_AMOUNT;
        state.last_speed_increase_tick = state.ticks;
    }

    let screen = state.screen();
    state.ship.rect.x += input.steer as f32 * SHIP_SPEED;
    state.ship.rect.clamp_x(&screen);

    move_bullets(state);
    move_asteroids(state);
    move_crystals(state);
    run_spawn_trials(state);
}

/// Advance bullets upward, cull those above the screen, and resolve
/// bullet/asteroid hits. Each bullet removes at most its FIRST overlapping
/// asteroid; later overlaps in the same frame survive.
fn move_bullets(state: &mut GameState) {
    let bullets = std::mem::take(&mut state.bullets);
    let mut kept = Vec::with_capacity(bullets.len());
    for mut bullet in bullets {
        bullet.rect.y -= BULLET_SPEED;
        if bullet.rect.bottom() < 0.0 {
            continue;
        }
        if let Some(hit) = state
            .asteroids
            .iter()
            .position(|a| bullet.rect.overlaps(&a.rect))
        {
            state.asteroids.remove(hit);
            continue;
        }
        kept.push(bullet);
    }
    state.bullets = kept;
}

/// Advance asteroids downward at the shared session speed. An asteroid that
/// leaves the bottom edge is dropped without a ship check; one that overlaps
/// the ship ends the session but stays on screen for the banner frame.
fn move_asteroids(state: &mut GameState) {
    let speed = state.asteroid_speed;
    let asteroids = std::mem::take(&mut state.asteroids);
    let mut kept = Vec::with_capacity(asteroids.len());
    for mut asteroid in asteroids {
        asteroid.rect.y += speed;
        if asteroid.rect.top() > SCREEN_HEIGHT {
            continue;
        }
        if asteroid.rect.overlaps(&state.ship.rect) {
            state.phase = Phase::GameOver;
            state.events.push(GameEvent::ShipHit);
        }
        kept.push(asteroid);
    }
    state.asteroids = kept;
}

fn move_crystals(state: &mut GameState) {
    let crystals = std::mem::take(&mut state.crystals);
    let mut kept = Vec::with_capacity(crystals.len());
    for mut crystal in crystals {
        crystal.rect.y += CRYSTAL_FALL_SPEED;
        if crystal.rect.top() > SCREEN_HEIGHT {
            continue;
        }
        if crystal.rect.overlaps(&state.ship.rect) {
            state.score += 1;
            state.events.push(GameEvent::CrystalCollected);
            continue;
        }
        kept.push(crystal);
    }
    state.crystals = kept;
}

/// Per-tick Bernoulli spawn trials. Asteroid size grows with score
/// (unbounded); spawn x ranges keep entities on screen at spawn.
fn run_spawn_trials(state: &mut GameState) {
    if state.rng.random_bool(ASTEROID_SPAWN_CHANCE) {
        let x = state.rng.random_range(0..=ASTEROID_SPAWN_X_MAX) as f32;
        let size = ASTEROID_BASE_SIZE + (state.score / 10) as f32;
        state.asteroids.push(Entity::new(
            x,
            ASTEROID_SPAWN_Y,
            size,
            size,
            state.asteroid_speed,
        ));
    }
    if state.rng.random_bool(CRYSTAL_SPAWN_CHANCE) {
        let x = state.rng.random_range(0..=CRYSTAL_SPAWN_X_MAX) as f32;
        state.crystals.push(Entity::new(
            x,
            CRYSTAL_SPAWN_Y,
            CRYSTAL_SIZE,
            CRYSTAL_SIZE,
            CRYSTAL_FALL_SPEED,
        ));
    }
}
