use serde::{Deserialize, Serialize};

use crate::collision::detect_collision;
use crate::config::PhysicsConfig;
use crate::forces::apply_natural_forces_with;
use crate::world::{Bounds, InputState, Obstacle, Player};

/// Which axes were blocked during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Free,
    BlockedX,
    BlockedY,
    BlockedBoth,
}

/// Advance the player by one tick: forces, then input, then a single
/// collision check against the proposed position.
///
/// There is no second pass after snapping, so a move that touches several
/// obstacles at once keeps whatever the resolver reported last.
pub fn move_character(
    player: &mut Player,
    input: &InputState,
    physics: &PhysicsConfig,
    obstacles: &[Obstacle],
    bounds: Bounds,
) -> TickOutcome {
    let (mut xv, mut yv) = apply_natural_forces_with(physics, player.xv, player.yv);

    xv += input.horizontal() * physics.input_acceleration;
    yv += input.vertical() * physics.input_acceleration;

    player.xv = xv;
    player.yv = yv;

    let new_x = player.x + xv;
    let new_y = player.y + yv;

    let collision = detect_collision(player, obstacles, bounds, new_x, new_y);

    match (collision.collision_x, collision.collision_y) {
        (None, None) => {
            player.x = new_x;
            player.y = new_y;
            TickOutcome::Free
        },
        (Some(cx), None) => {
            player.xv = 0.0;
            player.x = cx;
            player.y = new_y;
            TickOutcome::BlockedX
        },
        (None, Some(cy)) => {
            player.yv = 0.0;
            player.x = new_x;
            player.y = cy;
            TickOutcome::BlockedY
        },
        (Some(cx), Some(cy)) => {
            player.xv = 0.0;
            player.yv = 0.0;
            player.x = cx;
            player.y = cy;
            TickOutcome::BlockedBoth
        },
    }
}
