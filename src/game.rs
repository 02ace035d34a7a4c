//! Game screen
//!
//! Owns one session's `GameState`, samples the keyboard into `TickInput`,
//! and advances the simulation with a fixed-timestep accumulator so the
//! per-frame pixel speeds hold at 60 Hz regardless of display rate.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::consts::*;
use crate::render;
use crate::sim::{GameState, Phase, TickInput, tick};

pub struct Game {
    state: GameState,
    accumulator: f32,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            accumulator: 0.0,
        }
    }

    /// Final score of the session, for the caller's scoreboard update.
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Frame loop. Ends on the quit signal (checked before any other frame
    /// work) or on any key press once the session is over; either way the
    /// caller goes back to the menu and reads the result via [`score`].
    ///
    /// [`score`]: Game::score
    pub async fn run(&mut self, assets: &Assets, audio: &AudioManager) {
        loop {
            if is_quit_requested() {
                return;
            }
            if self.state.phase == Phase::GameOver && !get_keys_pressed().is_empty() {
                return;
            }

            let mut input = sample_input();

            // Cap the delta so a stall can't flood the accumulator
            self.accumulator += get_frame_time().min(0.1);
            let mut substeps = 0;
            while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input);
                for event in self.state.events.drain(..) {
                    audio.play_event(event, assets);
                }
                // Clear one-shot input after the first substep
                input.fire = false;
                self.accumulator -= TICK_DT;
                substeps += 1;
            }

            render::draw_session(&self.state, assets);
            next_frame().await;
        }
    }
}

/// Read the current keyboard state: held arrows steer, Space fires
/// (edge-triggered).
fn sample_input() -> TickInput {
    let right = is_key_down(KeyCode::Right) as i32;
    let left = is_key_down(KeyCode::Left) as i32;
    TickInput {
        steer: right - left,
        fire: is_key_pressed(KeyCode::Space),
    }
}
