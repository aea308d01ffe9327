//! Fixed timestep simulation tick
//!
//! One call advances the whole game by one 60 Hz frame, in a fixed
//! order: paddle intent, ball integration and collision resolution
//! (walls, paddle, first block, first enemy, bottom-out), raider
//! trapped-check and movement, level-clear check.

use glam::Vec2;

use super::collision::{ball_rect_overlap, deflect_off_face, enforce_min_angle, struck_face, Rect};
use super::enemy;
use super::state::{Ball, BallState, GamePhase, GameWorld, Paddle};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Paddle steering intent
    pub steer: Steer,
    /// Launch the resting ball (edge-triggered)
    pub launch: bool,
    /// Restart after game over (edge-triggered, ignored otherwise)
    pub restart: bool,
}

/// Paddle steering intent for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Steer {
    #[default]
    Hold,
    Left,
    Right,
}

/// Advance the game state by one fixed timestep
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    match world.phase {
        GamePhase::GameOver => {
            // Terminal: physics, movement and scoring are frozen; only
            // the restart signal is honored
            if input.restart {
                world.reset();
                log::info!("game restarted");
            }
            return;
        }
        GamePhase::LevelCleared => return,
        GamePhase::Playing => {}
    }

    world.time_ticks += 1;

    match input.steer {
        Steer::Left => world.paddle.step(-1.0),
        Steer::Right => world.paddle.step(1.0),
        Steer::Hold => {}
    }

    if world.ball.state == BallState::Resting {
        world.ball.follow_paddle(&world.paddle);
        if input.launch {
            world.ball.launch();
        }
    }
    // A ball launched this tick flies this tick
    if world.ball.state == BallState::Free {
        update_free_ball(world);
        if world.phase == GamePhase::GameOver {
            return;
        }
    }

    enemy::update_trapped(world);
    enemy::update_enemies(world);

    if world.active_blocks() == 0 && world.active_enemies() == 0 {
        world.phase = GamePhase::LevelCleared;
        log::info!("level cleared with score {}", world.score);
    }
}

fn update_free_ball(world: &mut GameWorld) {
    let ball = &mut world.ball;
    ball.pos += ball.vel;

    resolve_walls(ball);
    resolve_paddle(ball, &world.paddle);
    resolve_block_hit(world);
    resolve_enemy_hit(world);

    if world.ball.pos.y > BOTTOM_Y {
        lose_ball(world);
    }
}

/// Left/right walls force the horizontal component outward; the top wall
/// forces the ball back down. Position is clamped to the wall face plus
/// radius, so a resolved ball is never outside the field.
fn resolve_walls(ball: &mut Ball) {
    if ball.pos.x - ball.radius <= PLAY_LEFT {
        ball.pos.x = PLAY_LEFT + ball.radius;
        ball.vel.x = ball.vel.x.abs();
    }
    if ball.pos.x + ball.radius >= PLAY_RIGHT {
        ball.pos.x = PLAY_RIGHT - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y - ball.radius <= PLAY_TOP {
        ball.pos.y = PLAY_TOP + ball.radius;
        ball.vel.y = ball.vel.y.abs();
    }
}

/// The reflection angle is governed entirely by where the ball strikes
/// the paddle: straight up near the center, tilting continuously out to
/// `PADDLE_MAX_TILT` at the edges.
fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) {
    if !ball_rect_overlap(ball.pos, ball.radius, &paddle.rect()) {
        return;
    }

    // 0 at the paddle center, -1/+1 at the edges
    let hit = (ball.pos.x - paddle.x) / paddle.width;
    let offset = ((hit - 0.5) * 2.0).clamp(-1.0, 1.0);

    if offset.abs() < PADDLE_DEAD_ZONE {
        ball.vel = Vec2::new(0.0, -BALL_SPEED);
    } else {
        let tilt = PADDLE_MAX_TILT * offset.abs();
        let side = if offset < 0.0 { -1.0 } else { 1.0 };
        ball.vel = Vec2::new(side * BALL_SPEED * tilt.sin(), -BALL_SPEED * tilt.cos());
    }

    // Seat the ball exactly on top of the paddle
    ball.pos.y = PADDLE_Y - ball.radius;
}

/// First overlapping active block in construction order wins the tick
fn resolve_block_hit(world: &mut GameWorld) {
    for block in &mut world.blocks {
        if !block.active || !ball_rect_overlap(world.ball.pos, world.ball.radius, &block.rect) {
            continue;
        }
        bounce_off(&mut world.ball, &block.rect);
        block.active = false;
        world.score += BLOCK_SCORE;
        return;
    }
}

/// First overlapping active raider in construction order wins the tick
fn resolve_enemy_hit(world: &mut GameWorld) {
    for enemy in &mut world.enemies {
        if !enemy.active || !ball_rect_overlap(world.ball.pos, world.ball.radius, &enemy.rect) {
            continue;
        }
        bounce_off(&mut world.ball, &enemy.rect);
        enemy.active = false;
        world.score += ENEMY_SCORE;
        return;
    }
}

/// Flip the struck-face component, then pull the trajectory off any
/// near-horizontal grazing path. Speed magnitude is conserved.
fn bounce_off(ball: &mut Ball, target: &Rect) {
    let face = struck_face(ball.pos, target);
    ball.vel = deflect_off_face(ball.vel, face);
    ball.vel = enforce_min_angle(ball.vel, MIN_BOUNCE_ANGLE);
}

fn lose_ball(world: &mut GameWorld) {
    world.lives = world.lives.saturating_sub(1);
    if world.lives > 0 {
        world.ball.reset_on(&world.paddle);
        log::debug!("ball lost, {} lives left", world.lives);
    } else {
        // The ball freezes where it fell
        world.ball.state = BallState::Resting;
        world.phase = GamePhase::GameOver;
        log::info!("game over with score {}", world.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Block, Enemy};

    /// A world with no entities and the ball already in flight
    fn launched_world() -> GameWorld {
        let mut world = GameWorld::new();
        world.blocks.clear();
        world.enemies.clear();
        world.ball.state = BallState::Free;
        world
    }

    #[test]
    fn test_center_paddle_hit_reflects_straight_up() {
        let paddle = Paddle::default();
        let mut ball = Ball::new(&paddle);
        ball.state = BallState::Free;
        ball.pos = Vec2::new(paddle.center_x(), PADDLE_Y);
        ball.vel = Vec2::new(3.0, 4.0);
        resolve_paddle(&mut ball, &paddle);
        assert_eq!(ball.vel, Vec2::new(0.0, -BALL_SPEED));
        assert_eq!(ball.pos.y, PADDLE_Y - ball.radius);
    }

    #[test]
    fn test_left_edge_hit_tilts_to_the_cap() {
        let paddle = Paddle::default();
        let mut ball = Ball::new(&paddle);
        ball.state = BallState::Free;
        ball.pos = Vec2::new(paddle.x, PADDLE_Y);
        ball.vel = Vec2::new(0.0, BALL_SPEED);
        resolve_paddle(&mut ball, &paddle);
        let expected = Vec2::new(
            -BALL_SPEED * PADDLE_MAX_TILT.sin(),
            -BALL_SPEED * PADDLE_MAX_TILT.cos(),
        );
        assert!((ball.vel - expected).length() < 1e-4);
        assert!(ball.vel.x < 0.0 && ball.vel.y < 0.0);
    }

    #[test]
    fn test_overhanging_hit_clamps_to_max_tilt() {
        let paddle = Paddle::default();
        let mut ball = Ball::new(&paddle);
        ball.state = BallState::Free;
        // Ball center hanging past the paddle edge
        ball.pos = Vec2::new(paddle.x - 10.0, PADDLE_Y);
        ball.vel = Vec2::new(0.0, BALL_SPEED);
        resolve_paddle(&mut ball, &paddle);
        let tilt = ball.vel.x.abs().atan2(ball.vel.y.abs());
        assert!((tilt - PADDLE_MAX_TILT).abs() < 1e-5);
        assert!(tilt <= MAX_BOUNCE_ANGLE + 1e-5);
    }

    #[test]
    fn test_side_wall_clamps_position_and_reflects() {
        let mut world = launched_world();
        world.ball.pos = Vec2::new(PLAY_LEFT + 1.0, 300.0);
        world.ball.vel = Vec2::new(-BALL_SPEED, -1.0);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.ball.pos.x, PLAY_LEFT + world.ball.radius);
        assert!(world.ball.vel.x > 0.0);
    }

    #[test]
    fn test_top_wall_forces_ball_down() {
        let mut world = launched_world();
        world.ball.pos = Vec2::new(400.0, PLAY_TOP + 10.0);
        world.ball.vel = Vec2::new(1.0, -BALL_SPEED);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.ball.pos.y, PLAY_TOP + world.ball.radius);
        assert!(world.ball.vel.y > 0.0);
    }

    #[test]
    fn test_block_hit_scores_and_conserves_speed() {
        let mut world = launched_world();
        world.blocks.push(Block::new(400.0, 300.0));
        world.ball.pos = Vec2::new(430.0, 335.0);
        world.ball.vel = Vec2::new(0.0, -BALL_SPEED);
        let speed_before = world.ball.vel.length();
        tick(&mut world, &TickInput::default());
        assert!(!world.blocks[0].active);
        assert_eq!(world.score, BLOCK_SCORE);
        assert!((world.ball.vel.length() - speed_before).abs() < 1e-4);
    }

    #[test]
    fn test_first_overlapping_block_wins() {
        let mut world = launched_world();
        world.blocks.push(Block::new(400.0, 300.0));
        world.blocks.push(Block::new(410.0, 300.0));
        world.ball.pos = Vec2::new(430.0, 335.0);
        world.ball.vel = Vec2::new(0.0, -BALL_SPEED);
        tick(&mut world, &TickInput::default());
        assert!(!world.blocks[0].active);
        assert!(world.blocks[1].active);
        assert_eq!(world.score, BLOCK_SCORE);
    }

    #[test]
    fn test_grazing_bounce_clamped_to_min_angle() {
        let mut world = launched_world();
        world.blocks.push(Block::new(400.0, 300.0));
        // Shallow approach from the left into the block's side face
        world.ball.pos = Vec2::new(377.0, 312.0);
        world.ball.vel = Vec2::new(7.9, 1.0);
        let speed_before = world.ball.vel.length();
        tick(&mut world, &TickInput::default());
        let v = world.ball.vel;
        assert!((v.length() - speed_before).abs() < 1e-3);
        let angle = v.y.abs().atan2(v.x.abs());
        assert!((angle - MIN_BOUNCE_ANGLE).abs() < 1e-4);
        // Reflected back-left, still drifting down
        assert!(v.x < 0.0 && v.y > 0.0);
    }

    #[test]
    fn test_one_block_one_enemy_score_thirty() {
        let mut world = launched_world();
        world.blocks.push(Block::new(400.0, 300.0));
        world.enemies.push(Enemy::new(405.0, 330.0, 1.0));
        world.ball.pos = Vec2::new(430.0, 335.0);
        world.ball.vel = Vec2::new(0.0, -BALL_SPEED);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.score, BLOCK_SCORE + ENEMY_SCORE);
        assert!(!world.blocks[0].active);
        assert!(!world.enemies[0].active);
        // With nothing left, the clear fires on the same tick
        assert_eq!(world.phase, GamePhase::LevelCleared);
    }

    #[test]
    fn test_level_clear_requires_both_counts_at_zero() {
        let mut world = launched_world();
        world.blocks.push(Block::new(100.0, 100.0));
        tick(&mut world, &TickInput::default());
        assert_eq!(world.phase, GamePhase::Playing);

        let mut world = launched_world();
        world.enemies.push(Enemy::new(100.0, 130.0, 1.0));
        tick(&mut world, &TickInput::default());
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ball_out_decrements_and_rests() {
        let mut world = launched_world();
        world.blocks.push(Block::new(100.0, 100.0));
        world.ball.pos = Vec2::new(400.0, BOTTOM_Y + 1.0);
        world.ball.vel = Vec2::new(0.0, BALL_SPEED);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.lives, STARTING_LIVES - 1);
        assert_eq!(world.ball.state, BallState::Resting);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.ball.pos.x, world.paddle.center_x());
    }

    #[test]
    fn test_final_life_freezes_then_restart_resets() {
        let mut world = launched_world();
        world.blocks.push(Block::new(100.0, 100.0));
        world.lives = 1;
        world.score = 120;
        world.ball.pos = Vec2::new(400.0, BOTTOM_Y + 1.0);
        world.ball.vel = Vec2::new(0.0, BALL_SPEED);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(world.lives, 0);
        let frozen = world.ball.pos;
        let ticks = world.time_ticks;

        // Physics and scoring are frozen now; launch does nothing
        let launch = TickInput {
            launch: true,
            ..TickInput::default()
        };
        tick(&mut world, &launch);
        assert_eq!(world.ball.pos, frozen);
        assert_eq!(world.time_ticks, ticks);
        assert_eq!(world.score, 120);

        // Restart is the one signal still honored
        let restart = TickInput {
            restart: true,
            ..TickInput::default()
        };
        tick(&mut world, &restart);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.lives, STARTING_LIVES);
        assert_eq!(world.score, 0);
        assert_eq!(world.ball.state, BallState::Resting);
        assert_eq!(world.blocks.len(), BLOCK_ROWS * BLOCK_COLS);
        assert_eq!(world.enemies.len(), ENEMY_ROWS * ENEMY_COLS);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut world = launched_world();
        world.blocks.push(Block::new(100.0, 100.0));
        world.score = 50;
        let restart = TickInput {
            restart: true,
            ..TickInput::default()
        };
        tick(&mut world, &restart);
        assert_eq!(world.score, 50);
        assert_eq!(world.blocks.len(), 1);
    }

    #[test]
    fn test_launch_frees_the_ball_the_same_tick() {
        let mut world = GameWorld::new();
        assert_eq!(world.ball.state, BallState::Resting);
        let rest_pos = world.ball.pos;
        let launch = TickInput {
            launch: true,
            ..TickInput::default()
        };
        tick(&mut world, &launch);
        assert_eq!(world.ball.state, BallState::Free);
        assert!(world.ball.pos != rest_pos);
    }

    #[test]
    fn test_resting_ball_follows_the_paddle() {
        let mut world = GameWorld::new();
        let steer = TickInput {
            steer: Steer::Right,
            ..TickInput::default()
        };
        tick(&mut world, &steer);
        assert_eq!(world.ball.pos.x, world.paddle.center_x());
    }
}
