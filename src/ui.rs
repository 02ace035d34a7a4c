//! Menu widgets

use macroquad::prelude::*;

const LABEL_FONT_SIZE: u16 = 36;

/// An outlined clickable button with a centered label.
pub struct Button {
    rect: Rect,
    label: String,
    hovered: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, w: f32, h: f32, label: &str) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            label: label.to_owned(),
            hovered: false,
        }
    }

    /// Update hover from the pointer position, then report whether a press
    /// landed. Pointer motion and press are evaluated in that order, so a
    /// press only registers while the pointer is hovering.
    pub fn process(&mut self, pointer: Vec2, pressed: bool) -> bool {
        self.hovered = self.rect.contains(pointer);
        self.hovered && pressed
    }

    pub fn draw(&self) {
        let color = if self.hovered { GRAY } else { WHITE };
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, color);

        let dims = measure_text(&self.label, None, LABEL_FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            self.rect.x + (self.rect.w - dims.width) / 2.0,
            self.rect.y + (self.rect.h + dims.height) / 2.0,
            LABEL_FONT_SIZE as f32,
            color,
        );
    }
}
