//! 2D vector type used throughout the simulation
//!
//! `NVec2` is a plain nalgebra `Vector2<f64>`: a copy value type, so every
//! arithmetic operation yields a new vector. Arithmetic is unchecked, dividing
//! by zero produces inf/NaN components exactly as IEEE-754 says.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Velocity from a launch direction (radians) and speed
pub fn from_polar(angle: f64, speed: f64) -> NVec2 {
    NVec2::new(angle.cos() * speed, angle.sin() * speed)
}

/// `v / |v|`, or `fallback` when `v` has zero length
pub fn unit_or(v: NVec2, fallback: NVec2) -> NVec2 {
    let len = v.norm();
    if len == 0.0 {
        fallback
    } else {
        v / len
    }
}
