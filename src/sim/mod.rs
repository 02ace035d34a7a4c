//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Entity, GameEvent, GameState, Phase};
pub use tick::{TickInput, tick};
