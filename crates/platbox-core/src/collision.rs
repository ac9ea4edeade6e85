//! Axis-wise collision resolution against the canvas borders and static
//! obstacles.
//!
//! The resolver does not move anything. It reports, per axis, the coordinate
//! the player should be snapped to, or `None` when that axis is unobstructed.
//! Borders are checked first; each overlapping obstacle is then tested in
//! list order and may overwrite what the borders (or an earlier obstacle)
//! reported.

use serde::{Deserialize, Serialize};

use crate::world::{Bounds, Obstacle, Player};

/// Per-axis blocking coordinates for a proposed move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionResult {
    pub collision_x: Option<f64>,
    pub collision_y: Option<f64>,
}

impl CollisionResult {
    pub fn is_clear(&self) -> bool {
        self.collision_x.is_none() && self.collision_y.is_none()
    }
}

/// Edges of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Aabb {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Aabb {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            right: x + width,
            top: y,
            bottom: y + height,
        }
    }

    fn of_obstacle(o: &Obstacle) -> Self {
        Self {
            left: o.left(),
            right: o.right(),
            top: o.top(),
            bottom: o.bottom(),
        }
    }

    /// Strict overlap: touching edges do not count.
    fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.bottom > other.top && self.top < other.bottom
    }

    fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.right > other.left && self.left < other.right
    }
}

/// Find where the player would be blocked if moved to `(new_x, new_y)`.
///
/// `player` must still hold the pre-move position and the post-input
/// velocity: the side of approach is judged from the previous box, and the
/// velocity sign picks which obstacle edge to snap to.
pub fn detect_collision(
    player: &Player,
    obstacles: &[Obstacle],
    bounds: Bounds,
    new_x: f64,
    new_y: f64,
) -> CollisionResult {
    let mut result = CollisionResult::default();
    let (w, h) = (player.width(), player.height());

    // Borders
    if new_x < 0.0 {
        result.collision_x = Some(0.0);
    }
    if new_x > bounds.width - w {
        result.collision_x = Some(bounds.width - w);
    }
    if new_y < 0.0 {
        result.collision_y = Some(0.0);
    }
    if new_y > bounds.height - h {
        result.collision_y = Some(bounds.height - h);
    }

    let next = Aabb::new(new_x, new_y, w, h);
    let prev = Aabb::new(player.x, player.y, w, h);

    for obstacle in obstacles {
        let obs = Aabb::of_obstacle(obstacle);
        if !next.overlaps(&obs) {
            continue;
        }

        if prev.left < obs.left && next.right > obs.left && prev.overlaps_vertically(&obs) {
            // Moving right into the obstacle's left edge
            result.collision_x = Some(if player.xv >= 0.0 {
                obs.left - w
            } else {
                obs.right
            });
        } else if next.left < obs.right && next.right > obs.right && prev.overlaps_vertically(&obs)
        {
            // Moving left into the obstacle's right edge
            result.collision_x = Some(if player.xv < 0.0 {
                obs.right
            } else {
                obs.left - w
            });
        } else if next.top < obs.top && next.bottom > obs.top && prev.overlaps_horizontally(&obs)
        {
            // Falling onto the obstacle's top edge
            result.collision_y = Some(if player.yv >= 0.0 {
                obs.top - h
            } else {
                obs.bottom
            });
        } else if next.top < obs.bottom
            && next.bottom > obs.bottom
            && prev.overlaps_horizontally(&obs)
        {
            // Rising into the obstacle's bottom edge
            result.collision_y = Some(if player.yv < 0.0 {
                obs.bottom
            } else {
                obs.top - h
            });
        }
    }

    result
}
