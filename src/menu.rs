//! Menu screen
//!
//! Shows the title, controls, top scores, and the Play button. Runs its own
//! frame loop until the player clicks Play or the window is closed.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::render::{draw_centered_text, draw_scaled};
use crate::scoreboard::ScoreBoard;
use crate::ui::Button;

const TEXT_FONT_SIZE: f32 = 24.0;
const LINE_SPACING: f32 = 25.0;

const CONTROLS: &[&str] = &[
    "Controls:",
    "Arrow Keys - Move the ship",
    "Space - Shoot",
    "",
    "Objective:",
    "Collect crystals",
    "Avoid asteroids",
];

pub struct Menu {
    play_button: Button,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            play_button: Button::new(300.0, 400.0, 200.0, 50.0, "Play"),
        }
    }

    /// Frame loop. Returns true when Play is clicked, false on quit signal.
    /// The quit check runs before any of the frame's other work.
    pub async fn run(&mut self, board: &ScoreBoard, assets: &Assets) -> bool {
        loop {
            if is_quit_requested() {
                return false;
            }

            let pointer = Vec2::from(mouse_position());
            let pressed = is_mouse_button_pressed(MouseButton::Left);
            if self.play_button.process(pointer, pressed) {
                return true;
            }

            self.draw(board, assets);
            next_frame().await;
        }
    }

    fn draw(&self, board: &ScoreBoard, assets: &Assets) {
        clear_background(BLACK);

        draw_centered_text("Space Scavenger", 148.0, 64.0, WHITE);
        draw_scaled(&assets.ship, 350.0, 200.0, 100.0, 100.0);

        for (i, line) in CONTROLS.iter().enumerate() {
            draw_text(
                line,
                50.0,
                318.0 + i as f32 * LINE_SPACING,
                TEXT_FONT_SIZE,
                WHITE,
            );
        }

        draw_text("Top Scores:", 600.0, 68.0, TEXT_FONT_SIZE, WHITE);
        for (i, score) in board.top().iter().enumerate() {
            draw_text(
                &score.to_string(),
                600.0,
                98.0 + i as f32 * LINE_SPACING,
                TEXT_FONT_SIZE,
                WHITE,
            );
        }

        self.play_button.draw();
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
