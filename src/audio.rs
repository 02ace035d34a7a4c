//! Sound playback
//!
//! Fire-and-forget: playback is triggered by simulation events and never
//! synchronized back into game state.

use macroquad::audio::{PlaySoundParams, Sound, play_sound};

use crate::assets::Assets;
use crate::sim::GameEvent;

/// Volume control for music and effect playback.
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }
}

impl AudioManager {
    /// Start the looping background track.
    pub fn start_music(&self, music: &Sound) {
        play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: self.master_volume * self.music_volume,
            },
        );
    }

    /// Play the clip for a simulation event, if it has one.
    pub fn play_event(&self, event: GameEvent, assets: &Assets) {
        let clip = match event {
            GameEvent::ShipHit => &assets.clash,
            // No pickup clip in the asset set
            GameEvent::CrystalCollected => return,
        };
        play_sound(
            clip,
            PlaySoundParams {
                looped: false,
                volume: self.master_volume * self.sfx_volume,
            },
        );
    }
}
