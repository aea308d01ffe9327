//! Read-only frame snapshots and the drawing strategy seam
//!
//! The platform adapter owns the window and the rasterizer. Each frame
//! it captures a `Scene` from the world and hands it to the
//! `RenderStrategy` picked once at startup: sprites when the whole set
//! loaded, primitive shapes otherwise. Strategies emit retained draw
//! lists; nothing in this crate touches the GPU.

use glam::Vec2;

use crate::consts::*;
use crate::sim::collision::Rect;
use crate::sim::state::{GamePhase, GameWorld};

/// RGBA color with 0-1 components
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const ORANGE: Color = [1.0, 0.65, 0.0, 1.0];
pub const CYAN: Color = [0.0, 1.0, 1.0, 1.0];

/// Overlay text for the terminal phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    LevelCleared,
    /// Also shows the restart prompt
    GameOver,
}

/// A raider as the renderer sees it
#[derive(Debug, Clone, Copy)]
pub struct EnemyView {
    pub rect: Rect,
    /// Trapped raiders draw in the dormant color
    pub trapped: bool,
}

/// Read-only snapshot of one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Left, right, top
    pub walls: [Rect; 3],
    pub blocks: Vec<Rect>,
    pub enemies: Vec<EnemyView>,
    pub paddle: Rect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub score: u64,
    pub lives: u8,
    pub overlay: Option<Overlay>,
}

impl Scene {
    /// Capture the drawable state of the world
    pub fn capture(world: &GameWorld) -> Self {
        let overlay = match world.phase {
            GamePhase::Playing => None,
            GamePhase::LevelCleared => Some(Overlay::LevelCleared),
            GamePhase::GameOver => Some(Overlay::GameOver),
        };
        Self {
            walls: wall_rects(),
            blocks: world
                .blocks
                .iter()
                .filter(|b| b.active)
                .map(|b| b.rect)
                .collect(),
            enemies: world
                .enemies
                .iter()
                .filter(|e| e.active)
                .map(|e| EnemyView {
                    rect: e.rect,
                    trapped: e.trapped,
                })
                .collect(),
            paddle: world.paddle.rect(),
            ball_center: world.ball.pos,
            ball_radius: world.ball.radius,
            score: world.score,
            lives: world.lives,
            overlay,
        }
    }
}

/// The three physical walls, starting below the HUD band
fn wall_rects() -> [Rect; 3] {
    [
        Rect::new(0.0, HUD_HEIGHT, WALL_THICKNESS, FIELD_HEIGHT - HUD_HEIGHT),
        Rect::new(
            PLAY_RIGHT,
            HUD_HEIGHT,
            WALL_THICKNESS,
            FIELD_HEIGHT - HUD_HEIGHT,
        ),
        Rect::new(0.0, HUD_HEIGHT, FIELD_WIDTH, WALL_THICKNESS),
    ]
}

/// One retained drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Sprite {
        sprite: SpriteId,
        rect: Rect,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// Sprite identifiers in the startup-loaded set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Paddle,
    Ball,
    Block,
    Enemy,
}

/// Which sprites the platform managed to load at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteSet {
    pub paddle: bool,
    pub ball: bool,
    pub block: bool,
    pub enemy: bool,
}

impl SpriteSet {
    pub fn complete(&self) -> bool {
        self.paddle && self.ball && self.block && self.enemy
    }
}

/// Drawing strategy, injected once at startup - never a per-draw-call
/// conditional
pub trait RenderStrategy {
    fn draw(&self, scene: &Scene) -> Vec<DrawCmd>;
}

/// Pick the strategy once: sprites only when the whole set loaded
pub fn select_strategy(sprites: SpriteSet) -> Box<dyn RenderStrategy> {
    if sprites.complete() {
        Box::new(SpriteRenderer)
    } else {
        Box::new(PrimitiveRenderer)
    }
}

/// Shape fallback renderer
pub struct PrimitiveRenderer;

impl RenderStrategy for PrimitiveRenderer {
    fn draw(&self, scene: &Scene) -> Vec<DrawCmd> {
        let mut cmds = chrome(scene);
        for rect in &scene.blocks {
            cmds.push(DrawCmd::FillRect {
                rect: *rect,
                color: GREEN,
            });
            cmds.push(DrawCmd::StrokeRect {
                rect: *rect,
                color: WHITE,
                width: 2.0,
            });
        }
        for enemy in &scene.enemies {
            let color = if enemy.trapped { ORANGE } else { RED };
            cmds.push(DrawCmd::FillRect {
                rect: enemy.rect,
                color,
            });
            cmds.push(DrawCmd::StrokeRect {
                rect: enemy.rect,
                color: WHITE,
                width: 2.0,
            });
        }
        cmds.push(DrawCmd::FillRect {
            rect: scene.paddle,
            color: CYAN,
        });
        cmds.push(DrawCmd::FillCircle {
            center: scene.ball_center,
            radius: scene.ball_radius,
            color: YELLOW,
        });
        cmds.extend(overlay_cmds(scene));
        cmds
    }
}

/// Sprite renderer; only selected when the complete set was loaded
pub struct SpriteRenderer;

impl RenderStrategy for SpriteRenderer {
    fn draw(&self, scene: &Scene) -> Vec<DrawCmd> {
        let mut cmds = chrome(scene);
        for rect in &scene.blocks {
            cmds.push(DrawCmd::Sprite {
                sprite: SpriteId::Block,
                rect: *rect,
            });
        }
        for enemy in &scene.enemies {
            cmds.push(DrawCmd::Sprite {
                sprite: SpriteId::Enemy,
                rect: enemy.rect,
            });
        }
        cmds.push(DrawCmd::Sprite {
            sprite: SpriteId::Paddle,
            rect: scene.paddle,
        });
        let r = scene.ball_radius;
        cmds.push(DrawCmd::Sprite {
            sprite: SpriteId::Ball,
            rect: Rect::new(
                scene.ball_center.x - r,
                scene.ball_center.y - r,
                r * 2.0,
                r * 2.0,
            ),
        });
        cmds.extend(overlay_cmds(scene));
        cmds
    }
}

/// Walls and HUD numbers, shared by both strategies
fn chrome(scene: &Scene) -> Vec<DrawCmd> {
    let mut cmds: Vec<DrawCmd> = scene
        .walls
        .iter()
        .map(|w| DrawCmd::FillRect {
            rect: *w,
            color: WHITE,
        })
        .collect();
    cmds.push(DrawCmd::Text {
        text: format!("Score: {}", scene.score),
        pos: Vec2::new(10.0, 8.0),
        color: WHITE,
    });
    cmds.push(DrawCmd::Text {
        text: format!("Lives: {}", scene.lives),
        pos: Vec2::new(180.0, 8.0),
        color: WHITE,
    });
    cmds
}

fn overlay_cmds(scene: &Scene) -> Vec<DrawCmd> {
    let center = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
    match scene.overlay {
        None => Vec::new(),
        Some(Overlay::LevelCleared) => vec![DrawCmd::Text {
            text: "LEVEL CLEARED!".into(),
            pos: center,
            color: YELLOW,
        }],
        Some(Overlay::GameOver) => vec![
            DrawCmd::Text {
                text: "GAME OVER".into(),
                pos: center - Vec2::new(0.0, 10.0),
                color: RED,
            },
            DrawCmd::Text {
                text: "PUSH SPACE KEY".into(),
                pos: center + Vec2::new(0.0, 30.0),
                color: WHITE,
            },
        ],
    }
}
