//! Game state and core simulation types
//!
//! Everything the tick function mutates lives in one `GameWorld` - there
//! is no ambient state anywhere else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::layout;
use crate::consts::*;

/// Current phase of gameplay. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (ball resting or in flight)
    Playing,
    /// Every block and raider destroyed
    LevelCleared,
    /// Out of lives; only restart is accepted
    GameOver,
}

/// Ball state - riding the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball rides the paddle center, waiting for launch input
    Resting,
    /// Ball is free-moving
    Free,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    pub fn new(paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: launch_velocity(),
            radius: BALL_RADIUS,
            state: BallState::Resting,
        };
        ball.follow_paddle(paddle);
        ball
    }

    /// Pin a resting ball to the paddle center (call each tick)
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        if self.state == BallState::Resting {
            self.pos = Vec2::new(paddle.center_x(), PADDLE_Y - self.radius - BALL_REST_GAP);
        }
    }

    /// Launch the ball from the resting state
    pub fn launch(&mut self) {
        if self.state == BallState::Resting {
            self.vel = launch_velocity();
            self.state = BallState::Free;
        }
    }

    /// Put the ball back on the paddle after a lost life
    pub fn reset_on(&mut self, paddle: &Paddle) {
        self.state = BallState::Resting;
        self.vel = launch_velocity();
        self.follow_paddle(paddle);
    }
}

fn launch_velocity() -> Vec2 {
    Vec2::new(
        BALL_SPEED * LAUNCH_ANGLE.cos(),
        BALL_SPEED * LAUNCH_ANGLE.sin(),
    )
}

/// The player's paddle; its y position and height are fixed constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Always positive - the bounce hit-offset division depends on it
    pub width: f32,
}

impl Paddle {
    pub fn new(x: f32, width: f32) -> Self {
        assert!(width > 0.0, "paddle width must be positive");
        Self { x, width }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, self.width, PADDLE_HEIGHT)
    }

    /// Step one tick in the given direction, clamped to the walls
    pub fn step(&mut self, dir: f32) {
        self.x = (self.x + dir * PADDLE_SPEED).clamp(PLAY_LEFT, PLAY_RIGHT - self.width);
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new(FIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0, PADDLE_WIDTH)
    }
}

/// A destructible block
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub active: bool,
}

impl Block {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, BLOCK_WIDTH, BLOCK_HEIGHT),
            active: true,
        }
    }
}

/// A raider. Spawns pinned between two block rows; once either row's
/// cover over its column is gone it patrols free and works its way down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub active: bool,
    /// Release is one-way: never set back to true within a level
    pub trapped: bool,
    /// Horizontal patrol direction, +1 or -1
    pub dir: f32,
    pub speed: f32,
    /// Ticks since the last voluntary descend attempt
    pub descend_timer: u32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, dir: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT),
            active: true,
            trapped: true,
            dir,
            speed: ENEMY_SPEED,
            descend_timer: 0,
        }
    }
}

/// Complete game state. Exclusively owned and mutated by `tick`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
    pub enemies: Vec<Enemy>,
}

impl GameWorld {
    /// Create a fresh world with the standard layout and a resting ball
    pub fn new() -> Self {
        let paddle = Paddle::default();
        let ball = Ball::new(&paddle);
        let mut world = Self {
            phase: GamePhase::Playing,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            paddle,
            ball,
            blocks: Vec::new(),
            enemies: Vec::new(),
        };
        layout::generate_level(&mut world);
        world
    }

    /// Full reset: fresh layout, lives and score, ball back on the
    /// paddle. The paddle keeps its position.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.time_ticks = 0;
        layout::generate_level(self);
        self.ball.reset_on(&self.paddle);
    }

    pub fn active_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }

    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
