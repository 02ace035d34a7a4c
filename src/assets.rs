//! Startup asset loading
//!
//! Everything is loaded once at process start; a missing or unreadable file
//! is a fatal startup error surfaced to `main`.

use macroquad::audio::{Sound, load_sound};
use macroquad::prelude::*;

/// Textures and sound clips used by both screens.
pub struct Assets {
    pub ship: Texture2D,
    pub asteroid: Texture2D,
    pub crystal: Texture2D,
    /// Background loop, started once at startup
    pub music: Sound,
    /// One-shot played when an asteroid hits the ship
    pub clash: Sound,
}

impl Assets {
    pub async fn load() -> Result<Self, macroquad::Error> {
        let ship = load_texture("assets/spaceship.png").await?;
        let asteroid = load_texture("assets/asteroid.png").await?;
        let crystal = load_texture("assets/energy_crystal.png").await?;
        let music = load_sound("assets/background_music.wav").await?;
        let clash = load_sound("assets/clash_sound.wav").await?;

        log::info!("assets loaded");
        Ok(Self {
            ship,
            asteroid,
            crystal,
            music,
            clash,
        })
    }
}
