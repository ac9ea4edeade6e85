pub mod collision;
pub mod config;
pub mod forces;
pub mod motion;
pub mod world;

pub use collision::{CollisionResult, detect_collision};
pub use config::{ConfigError, PlatboxConfig};
pub use forces::apply_natural_forces;
pub use motion::{TickOutcome, move_character};
pub use world::{Bounds, Direction, InputState, Obstacle, Player, WorldState};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::PlatboxConfig;
    use crate::motion::TickOutcome;
    use crate::world::{Obstacle, WorldState};

    /// A default-sized world with the given obstacles instead of the built-in layout.
    pub fn world_with_obstacles(obstacles: Vec<Obstacle>) -> WorldState {
        let config = PlatboxConfig {
            obstacles,
            ..PlatboxConfig::default()
        };
        WorldState::new(&config)
    }

    /// A default-sized world with no obstacles, only borders.
    pub fn open_world() -> WorldState {
        world_with_obstacles(Vec::new())
    }

    /// Run `n` ticks with the world's current input, returning every outcome.
    pub fn run_ticks(world: &mut WorldState, n: usize) -> Vec<TickOutcome> {
        (0..n).map(|_| world.tick()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn open_world_player_falls_to_floor() {
        let mut world = open_world();
        let outcomes = run_ticks(&mut world, 200);
        assert_eq!(world.player.y, 750.0);
        assert_eq!(world.player.x, 600.0);
        assert_eq!(outcomes.last(), Some(&TickOutcome::BlockedY));
    }

    #[test]
    fn held_key_accelerates_to_terminal_speed() {
        let mut world = open_world();
        world.input.on_key_down("ArrowRight");
        world.tick();
        assert_eq!(world.player.xv, 1.0);
        for _ in 0..20 {
            world.tick();
        }
        // xv converges to 1 / (1 - 0.9) = 10 while nothing is in the way
        assert!(world.player.xv > 8.0 && world.player.xv < 10.0);
    }

    #[test]
    fn world_detect_collision_uses_current_player() {
        let world = world_with_obstacles(vec![Obstacle::new(640.0, 390.0, 20.0, 20.0)]);
        // Player at (600, 400) with xv = 0 pushing right into the block
        let r = world.detect_collision(605.0, 400.0);
        assert_eq!(r.collision_x, Some(590.0));
        assert_eq!(r.collision_y, None);
    }
}
