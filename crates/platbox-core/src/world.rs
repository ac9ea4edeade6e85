use serde::{Deserialize, Serialize};

use crate::collision::{CollisionResult, detect_collision};
use crate::config::{PhysicsConfig, PlatboxConfig};
use crate::motion::{TickOutcome, move_character};

/// Static axis-aligned rectangle the player cannot pass through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The built-in six-obstacle layout, positioned relative to the canvas size.
pub fn default_obstacles(width: f64, height: f64) -> Vec<Obstacle> {
    let cx = width / 2.0;
    vec![
        Obstacle::new(cx, height - 100.0, 100.0, 100.0),
        Obstacle::new(cx + 400.0, height - 300.0, 100.0, 100.0),
        Obstacle::new(cx - 200.0, height - 500.0, 100.0, 100.0),
        Obstacle::new(cx + 300.0, height - 500.0, 100.0, 100.0),
        Obstacle::new(cx - 200.0, height - 400.0, 500.0, 10.0),
        Obstacle::new(cx - 400.0, height - 500.0, 10.0, 500.0),
    ]
}

/// The controllable box. Size is fixed for the lifetime of the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub xv: f64,
    pub yv: f64,
    width: f64,
    height: f64,
}

impl Player {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            xv: 0.0,
            yv: 0.0,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Canvas extent the player is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// One of the four steering directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.code`/`key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            _ => None,
        }
    }
}

/// Which direction keys are currently held. Only the held state matters,
/// not the order events arrived in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
        }
    }

    /// Handle a key-down event. Returns true if the key is a direction key.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set(direction, true);
                true
            },
            None => false,
        }
    }

    /// Handle a key-up event. Returns true if the key is a direction key.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set(direction, false);
                true
            },
            None => false,
        }
    }

    /// -1, 0 or +1. Holding both left and right cancels out.
    pub fn horizontal(&self) -> f64 {
        axis(self.left, self.right)
    }

    /// -1 (up), 0 or +1 (down). Holding both cancels out.
    pub fn vertical(&self) -> f64 {
        axis(self.up, self.down)
    }
}

fn axis(negative: bool, positive: bool) -> f64 {
    if negative && !positive {
        -1.0
    } else if positive && !negative {
        1.0
    } else {
        0.0
    }
}

/// Everything the simulation reads or writes each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub player: Player,
    pub input: InputState,
    pub physics: PhysicsConfig,
    obstacles: Vec<Obstacle>,
    bounds: Bounds,
    tick: u64,
}

impl WorldState {
    /// Build a world from config. The player starts at the canvas center.
    pub fn new(config: &PlatboxConfig) -> Self {
        let bounds = Bounds {
            width: config.world.width,
            height: config.world.height,
        };
        let player = Player::new(
            bounds.width / 2.0,
            bounds.height / 2.0,
            config.world.player_width,
            config.world.player_height,
        );
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            obstacles = config.obstacles.len(),
            "world created"
        );
        Self {
            player,
            input: InputState::default(),
            physics: config.physics.clone(),
            obstacles: config.obstacles.clone(),
            bounds,
            tick: 0,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of ticks simulated so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Blocking positions for a proposed move from the player's current position.
    pub fn detect_collision(&self, new_x: f64, new_y: f64) -> CollisionResult {
        detect_collision(&self.player, &self.obstacles, self.bounds, new_x, new_y)
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = move_character(
            &mut self.player,
            &self.input,
            &self.physics,
            &self.obstacles,
            self.bounds,
        );
        self.tick += 1;
        tracing::trace!(
            tick = self.tick,
            x = self.player.x,
            y = self.player.y,
            xv = self.player.xv,
            yv = self.player.yv,
            ?outcome,
            "tick"
        );
        outcome
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(&PlatboxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_at_center_at_rest() {
        let world = WorldState::default();
        assert_eq!(world.player.x, 600.0);
        assert_eq!(world.player.y, 400.0);
        assert_eq!(world.player.xv, 0.0);
        assert_eq!(world.player.yv, 0.0);
        assert_eq!(world.player.width(), 50.0);
        assert_eq!(world.player.height(), 50.0);
        assert_eq!(world.tick_count(), 0);
    }

    #[test]
    fn default_layout_matches_canvas() {
        let obstacles = default_obstacles(1200.0, 800.0);
        assert_eq!(obstacles.len(), 6);
        assert_eq!(obstacles[0], Obstacle::new(600.0, 700.0, 100.0, 100.0));
        assert_eq!(obstacles[1], Obstacle::new(1000.0, 500.0, 100.0, 100.0));
        assert_eq!(obstacles[2], Obstacle::new(400.0, 300.0, 100.0, 100.0));
        assert_eq!(obstacles[3], Obstacle::new(900.0, 300.0, 100.0, 100.0));
        assert_eq!(obstacles[4], Obstacle::new(400.0, 400.0, 500.0, 10.0));
        assert_eq!(obstacles[5], Obstacle::new(200.0, 300.0, 10.0, 500.0));
    }

    #[test]
    fn obstacle_list_survives_ticks_unchanged() {
        let mut world = WorldState::default();
        let before = world.obstacles().to_vec();
        for _ in 0..120 {
            world.tick();
        }
        assert_eq!(world.obstacles(), &before[..]);
        assert_eq!(world.tick_count(), 120);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("KeyA"), None);
        assert_eq!(Direction::from_key("Space"), None);
    }

    #[test]
    fn key_down_and_up_toggle_flags() {
        let mut input = InputState::default();
        assert!(input.on_key_down("ArrowLeft"));
        assert!(input.left);
        assert!(input.on_key_down("ArrowDown"));
        assert!(input.down);

        assert!(input.on_key_up("ArrowLeft"));
        assert!(!input.left);
        assert!(input.down);

        assert!(!input.on_key_down("Enter"));
        assert_eq!(
            input,
            InputState {
                down: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn repeated_key_down_is_idempotent() {
        let mut input = InputState::default();
        input.on_key_down("ArrowRight");
        input.on_key_down("ArrowRight");
        assert_eq!(input.horizontal(), 1.0);
        input.on_key_up("ArrowRight");
        assert_eq!(input.horizontal(), 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let input = InputState {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        assert_eq!(input.horizontal(), 0.0);
        assert_eq!(input.vertical(), 0.0);

        let input = InputState {
            left: true,
            up: true,
            ..Default::default()
        };
        assert_eq!(input.horizontal(), -1.0);
        assert_eq!(input.vertical(), -1.0);
    }

    #[test]
    fn snapshot_json_round_trip() {
        let mut world = WorldState::default();
        world.input.right = true;
        world.tick();
        let json = serde_json::to_string(&world).unwrap();
        let back: WorldState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world);
        assert!(json.contains("\"tick\":1"));
    }
}
