//! Per-frame drawing
//!
//! Sprites are scaled to their entity rects; the asteroid texture grows
//! with the entities as score climbs.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::*;
use crate::sim::{GameState, Phase};

const HUD_FONT_SIZE: f32 = 36.0;

/// Draw one frame of the play session: playfield, HUD, and the game-over
/// banner when the session has ended.
pub fn draw_session(state: &GameState, assets: &Assets) {
    clear_background(BLACK);

    draw_scaled(&assets.ship, state.ship.rect.x, state.ship.rect.y, SHIP_SIZE, SHIP_SIZE);

    for bullet in &state.bullets {
        draw_rectangle(
            bullet.rect.x,
            bullet.rect.y,
            bullet.rect.w,
            bullet.rect.h,
            RED,
        );
    }
    for asteroid in &state.asteroids {
        draw_scaled(
            &assets.asteroid,
            asteroid.rect.x,
            asteroid.rect.y,
            asteroid.rect.w,
            asteroid.rect.h,
        );
    }
    for crystal in &state.crystals {
        draw_scaled(
            &assets.crystal,
            crystal.rect.x,
            crystal.rect.y,
            CRYSTAL_SIZE,
            CRYSTAL_SIZE,
        );
    }

    draw_text(&format!("Score: {}", state.score), 10.0, 38.0, HUD_FONT_SIZE, WHITE);
    draw_text(
        &format!("Speed: {:.1}", state.asteroid_speed),
        10.0,
        78.0,
        HUD_FONT_SIZE,
        WHITE,
    );

    if state.phase == Phase::GameOver {
        draw_centered_text("Game Over!", SCREEN_HEIGHT / 2.0, HUD_FONT_SIZE, WHITE);
    }
}

/// Draw a texture stretched to the given size.
pub fn draw_scaled(texture: &Texture2D, x: f32, y: f32, w: f32, h: f32) {
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

/// Draw text horizontally centered on the screen, baseline at `y`.
pub fn draw_centered_text(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, y, font_size, color);
}
