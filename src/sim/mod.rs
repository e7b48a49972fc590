//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod barrier;
pub mod rect;
pub mod state;
pub mod tick;

pub use barrier::{Barrier, BarrierCell};
pub use rect::Rect;
pub use state::{
    GameEvent, GamePhase, GameState, Invader, InvaderKind, InvaderShot, Player, PlayerShot,
    ShotStyle, Ufo,
};
pub use tick::{TickInput, move_interval_ms, tick};
