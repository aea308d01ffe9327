//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Stable iteration order (construction order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{
    ball_rect_overlap, deflect_off_face, enforce_min_angle, struck_face, Face, Rect,
};
pub use layout::generate_level;
pub use state::{Ball, BallState, Block, Enemy, GamePhase, GameWorld, Paddle};
pub use tick::{tick, Steer, TickInput};
