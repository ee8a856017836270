//! Time integration for the ball world
//!
//! Explicit Euler drift for positions plus the velocity decay hook. Velocities
//! only change through collisions, so there is no force evaluation here.

use super::states::World;

/// Advance every position by one step: x_n+1 = x_n + dt * v_n
pub fn euler_integrator(world: &mut World, dt: f64) {
    for b in world.bodies_mut() {
        b.x += b.v * dt;
    }
    world.t += dt;
}

/// Scale every velocity by decay^dt. With the default decay of 1.0 the factor
/// is exactly 1 and nothing changes.
pub fn apply_decay(world: &mut World, dt: f64) {
    let factor = world.decay.powf(dt);
    if factor == 1.0 {
        return;
    }
    for b in world.bodies_mut() {
        b.v *= factor;
    }
}
