//! Draw-list building
//!
//! Turns the current game state into an ordered list of backend-agnostic
//! draw commands, back to front. All coordinates are world units; the host
//! applies its `Camera` when issuing actual draw calls.

use glam::Vec2;

use crate::assets::SpriteId;
use crate::consts::MAX_DRAG_DISTANCE;
use crate::sim::course::{ObstacleKind, Shape, SurfaceType};
use crate::sim::{GamePhase, GameState};

/// One backend-agnostic draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Terrain zone fill
    Zone { shape: Shape, surface: SurfaceType },
    /// Solid or slope obstacle
    Obstacle { shape: Shape, kind: ObstacleKind },
    /// The cup opening
    Cup { center: Vec2, radius: f32 },
    /// Named sprite anchored at its bottom-center
    Sprite { id: SpriteId, pos: Vec2 },
    /// The ball
    Ball { center: Vec2, radius: f32 },
    /// Aim indicator while dragging; `power` is the 0-1 charge fraction
    AimLine { from: Vec2, to: Vec2, power: f32 },
}

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState) -> Vec<DrawCmd> {
    let hole = state.current_hole();
    let mut cmds = Vec::with_capacity(hole.zones.len() + hole.obstacles.len() + 4);

    // Terrain first, in definition order; later zones draw over earlier
    // ones just as they outrank them in surface queries
    for zone in &hole.zones {
        cmds.push(DrawCmd::Zone {
            shape: zone.shape,
            surface: zone.surface,
        });
    }

    cmds.push(DrawCmd::Cup {
        center: hole.cup,
        radius: hole.cup_radius,
    });
    cmds.push(DrawCmd::Sprite {
        id: SpriteId::Flag,
        pos: hole.cup,
    });

    for obstacle in &hole.obstacles {
        cmds.push(DrawCmd::Obstacle {
            shape: obstacle.shape,
            kind: obstacle.kind,
        });
    }

    if !state.ball.in_hole {
        cmds.push(DrawCmd::Ball {
            center: state.ball.pos,
            radius: state.ball.radius,
        });
    }

    // Slingshot preview: reversed drag vector, anchored on the ball
    if state.phase == GamePhase::Aiming
        && let Some((start, current)) = state.shot.aim_preview()
    {
        let pull = start - current;
        let power = (pull.length() / MAX_DRAG_DISTANCE).min(1.0);
        cmds.push(DrawCmd::AimLine {
            from: state.ball.pos,
            to: state.ball.pos + pull,
            power,
        });
    }

    cmds
}
