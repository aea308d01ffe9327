//! Deterministic level layout
//!
//! Blocks and raiders are laid out on alternating rows below the top
//! wall: even rows hold blocks, odd rows hold raiders. Same inputs
//! always produce the same layout - there is no randomness.

use super::state::{Block, Enemy, GameWorld};
use crate::consts::*;

/// Populate the world with a fresh block/enemy grid
pub fn generate_level(world: &mut GameWorld) {
    world.blocks = build_blocks();
    world.enemies = build_enemies();
}

/// Block rows, stretched to span the gap between the side walls
pub fn build_blocks() -> Vec<Block> {
    let available = PLAY_RIGHT - PLAY_LEFT;
    let natural = BLOCK_COLS as f32 * BLOCK_WIDTH + (BLOCK_COLS - 1) as f32 * BLOCK_SPACING;
    // Distribute leftover span equally into the gaps so the row reaches
    // the right wall; nominal spacing if it already fills
    let spacing = if natural < available && BLOCK_COLS > 1 {
        BLOCK_SPACING + (available - natural) / (BLOCK_COLS - 1) as f32
    } else {
        BLOCK_SPACING
    };

    let mut blocks = Vec::with_capacity(BLOCK_ROWS * BLOCK_COLS);
    for row in 0..(BLOCK_ROWS + ENEMY_ROWS) {
        if row % 2 != 0 {
            continue;
        }
        let y = BLOCK_START_Y + row as f32 * ROW_HEIGHT;
        for col in 0..BLOCK_COLS {
            let x = PLAY_LEFT + col as f32 * (BLOCK_WIDTH + spacing);
            blocks.push(Block::new(x, y));
        }
    }
    blocks
}

/// Enemy rows, centered in their band and pitched evenly with symmetric
/// margins. Direction alternates by column so neighbors split apart.
pub fn build_enemies() -> Vec<Enemy> {
    let span = FIELD_WIDTH - 4.0 * WALL_THICKNESS;
    let pitch = span / (ENEMY_COLS + 1) as f32;

    let mut enemies = Vec::with_capacity(ENEMY_ROWS * ENEMY_COLS);
    for row in 0..(BLOCK_ROWS + ENEMY_ROWS) {
        if row % 2 != 1 {
            continue;
        }
        let y = BLOCK_START_Y + row as f32 * ROW_HEIGHT + (ROW_HEIGHT - ENEMY_HEIGHT) / 2.0;
        for col in 0..ENEMY_COLS {
            let x = PLAY_LEFT + (col + 1) as f32 * pitch - ENEMY_WIDTH / 2.0;
            let dir = if col % 2 == 0 { 1.0 } else { -1.0 };
            enemies.push(Enemy::new(x, y, dir));
        }
    }
    enemies
}
