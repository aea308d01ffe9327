//! Raider patrol and trap-release logic
//!
//! Raiders spawn pinned between two block rows. One stays trapped while
//! intact blocks cover its column both above and below; losing either
//! cover releases it for good. Free raiders patrol sideways and work
//! their way down toward the paddle in timed steps.

use super::collision::Rect;
use super::state::{Block, Enemy, GameWorld};
use crate::consts::*;

/// Release any raider whose block cover is gone on either side. Runs
/// before movement each tick; release is permanent.
pub fn update_trapped(world: &mut GameWorld) {
    let blocks = &world.blocks;
    for enemy in &mut world.enemies {
        if !enemy.active || !enemy.trapped {
            continue;
        }
        let mut above = false;
        let mut below = false;
        for block in blocks {
            if !block.active {
                continue;
            }
            // Only blocks over the raider's column matter
            if block.rect.x >= enemy.rect.right() || block.rect.right() <= enemy.rect.x {
                continue;
            }
            if block.rect.y < enemy.rect.y {
                above = true;
            }
            if block.rect.y > enemy.rect.bottom() {
                below = true;
            }
        }
        if !(above && below) {
            enemy.trapped = false;
        }
    }
}

/// Patrol/descend update for every active, released raider
pub fn update_enemies(world: &mut GameWorld) {
    for i in 0..world.enemies.len() {
        let e = world.enemies[i];
        if !e.active || e.trapped {
            continue;
        }

        let mut timer = e.descend_timer + 1;
        let mut descend = false;
        if timer >= ENEMY_DESCEND_INTERVAL {
            descend = true;
            timer = 0;
        }
        world.enemies[i].descend_timer = timer;

        // Horizontal patrol step first
        let side_step = Rect {
            x: e.rect.x + e.dir * e.speed,
            ..e.rect
        };
        if placement_open(&side_step, &world.blocks, &world.enemies, Some(i)) {
            world.enemies[i].rect.x = side_step.x;
        } else {
            // A wall rejection snaps to the wall and turns around; any
            // rejection forces a descend attempt
            if side_step.x <= PLAY_LEFT {
                world.enemies[i].rect.x = PLAY_LEFT;
                world.enemies[i].dir = 1.0;
            } else if side_step.right() >= PLAY_RIGHT {
                world.enemies[i].rect.x = PLAY_RIGHT - e.rect.w;
                world.enemies[i].dir = -1.0;
            }
            descend = true;
        }

        if descend {
            let here = world.enemies[i].rect;
            let down_step = Rect {
                y: here.y + ENEMY_DESCEND_STEP,
                ..here
            };
            // Blocked descends are skipped silently - no alternate move
            if placement_open(&down_step, &world.blocks, &world.enemies, Some(i)) {
                world.enemies[i].rect.y = down_step.y;
            }
        }
    }
}

/// A candidate raider position is open when it stays inside the walls,
/// keeps `ENEMY_PADDLE_BUFFER` of bounce room above the paddle, and
/// overlaps no active block or other active raider. `exclude` drops the
/// moving raider from the enemy scan - its own stale position would
/// otherwise reject every step.
pub fn placement_open(
    candidate: &Rect,
    blocks: &[Block],
    enemies: &[Enemy],
    exclude: Option<usize>,
) -> bool {
    if candidate.x < PLAY_LEFT || candidate.right() > PLAY_RIGHT {
        return false;
    }
    if candidate.y < PLAY_TOP {
        return false;
    }
    if candidate.bottom() > PADDLE_Y - ENEMY_PADDLE_BUFFER {
        return false;
    }
    if blocks.iter().any(|b| b.active && b.rect.overlaps(candidate)) {
        return false;
    }
    enemies
        .iter()
        .enumerate()
        .all(|(j, e)| Some(j) == exclude || !e.active || !e.rect.overlaps(candidate))
}
