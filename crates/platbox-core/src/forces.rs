use crate::config::PhysicsConfig;

/// Downward acceleration added to `yv` every tick (units/tick^2).
pub const GRAVITY_SPEED: f64 = 0.5;
/// Fraction of horizontal velocity kept each tick.
pub const FRICTION: f64 = 0.9;

/// Gravity and horizontal drag with the default constants.
pub fn apply_natural_forces(xv: f64, yv: f64) -> (f64, f64) {
    apply_natural_forces_with(&PhysicsConfig::default(), xv, yv)
}

/// Gravity and horizontal drag using the given physics parameters.
pub fn apply_natural_forces_with(physics: &PhysicsConfig, xv: f64, yv: f64) -> (f64, f64) {
    (xv * physics.friction, yv + physics.gravity)
}
