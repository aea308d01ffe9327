//! Wall Raiders entry point
//!
//! Headless demo loop: runs the fixed-timestep simulation with scripted
//! input, capped to 60 Hz, and logs the resulting frame. A windowed
//! build plugs its own input and raster adapters into the same
//! `tick`/`Scene` boundary.

use std::thread;
use std::time::{Duration, Instant};

use wall_raiders::consts::SIM_DT;
use wall_raiders::render::{select_strategy, Scene, SpriteSet};
use wall_raiders::sim::{tick, GamePhase, GameWorld, Steer, TickInput};

fn main() {
    env_logger::init();
    log::info!("Wall Raiders (headless) starting...");

    let mut world = GameWorld::new();
    // No sprite assets in the headless build - primitive shapes
    let strategy = select_strategy(SpriteSet::default());

    let frame = Duration::from_secs_f32(SIM_DT);
    let mut input = TickInput {
        launch: true,
        ..TickInput::default()
    };

    for _ in 0..600u32 {
        let start = Instant::now();

        // Chase the ball so the demo rallies for a while
        input.steer = if world.ball.pos.x < world.paddle.center_x() {
            Steer::Left
        } else {
            Steer::Right
        };

        tick(&mut world, &input);
        input.launch = false;

        if world.phase != GamePhase::Playing {
            break;
        }
        if world.time_ticks % 60 == 0 {
            log::debug!(
                "t={} score={} lives={} raiders={}",
                world.time_ticks,
                world.score,
                world.lives,
                world.active_enemies()
            );
        }

        if let Some(remaining) = frame.checked_sub(start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    let cmds = strategy.draw(&Scene::capture(&world));
    log::info!(
        "stopped at t={} phase={:?} score={} lives={} ({} draw commands)",
        world.time_ticks,
        world.phase,
        world.score,
        world.lives,
        cmds.len()
    );
}
