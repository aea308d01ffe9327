//! Wall Raiders - a single-screen breakout/Galaxian hybrid
//!
//! Raiders sit trapped between rows of destructible blocks. Break either
//! row of their cover and they patrol free, working their way down
//! toward the paddle.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Read-only frame snapshots and the drawing strategy seam

pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Score/lives bar across the top; the walls start below it
    pub const HUD_HEIGHT: f32 = 40.0;
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Inner faces of the three walls. There is no bottom wall - a ball
    /// past `BOTTOM_Y` is out of bounds.
    pub const PLAY_LEFT: f32 = WALL_THICKNESS;
    pub const PLAY_RIGHT: f32 = FIELD_WIDTH - WALL_THICKNESS;
    pub const PLAY_TOP: f32 = HUD_HEIGHT + WALL_THICKNESS;
    pub const BOTTOM_Y: f32 = FIELD_HEIGHT;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const PADDLE_Y: f32 = FIELD_HEIGHT - 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_SPEED: f32 = 8.0;
    /// Gap between a resting ball and the paddle top
    pub const BALL_REST_GAP: f32 = 5.0;
    /// Launch direction: 45 degrees, up and to the right
    pub const LAUNCH_ANGLE: f32 = -std::f32::consts::FRAC_PI_4;

    /// Minimum incidence angle from horizontal after block/enemy bounces
    pub const MIN_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
    /// Steepest deflection from vertical any bounce may impart
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Maximum paddle deflection from vertical, reached at the edges
    pub const PADDLE_MAX_TILT: f32 = std::f32::consts::FRAC_PI_3;
    /// |hit offset| below this reflects straight up
    pub const PADDLE_DEAD_ZONE: f32 = 0.05;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 25.0;
    pub const BLOCK_ROWS: usize = 3;
    pub const BLOCK_COLS: usize = 10;
    pub const BLOCK_START_Y: f32 = 100.0;
    /// Nominal gap between blocks; stretched to fill the field
    pub const BLOCK_SPACING: f32 = 5.0;
    /// Vertical pitch of the alternating block/enemy rows
    pub const ROW_HEIGHT: f32 = BLOCK_HEIGHT + BLOCK_SPACING;

    /// Enemy grid
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_ROWS: usize = 2;
    pub const ENEMY_COLS: usize = 8;
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Ticks between voluntary descend attempts (1 s at 60 Hz)
    pub const ENEMY_DESCEND_INTERVAL: u32 = 60;
    pub const ENEMY_DESCEND_STEP: f32 = 10.0;
    /// Bounce room enemies must leave above the paddle
    pub const ENEMY_PADDLE_BUFFER: f32 = 100.0;

    /// Lives and scoring
    pub const STARTING_LIVES: u8 = 3;
    pub const BLOCK_SCORE: u64 = 10;
    pub const ENEMY_SCORE: u64 = 20;
}
