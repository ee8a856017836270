//! Core state types for the ball simulation.
//!
//! - `Body`  a circular body: position, velocity, radius, derived mass, color
//! - `World` the fixed body collection plus the arena it bounces around in
//!
//! Positions use arena coordinates: origin at the top-left corner, `x` to the
//! right, `y` downwards.

use std::f64::consts::PI;

use super::vector::{from_polar, NVec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position (center)
    pub v: NVec2, // velocity, arena units per second
    radius: f64,
    m: f64, // mass, always PI * radius^2
    color: String,
}

impl Body {
    /// Build a body from its center, radius, velocity and display color.
    /// Mass is derived from the radius (uniform areal density).
    ///
    /// # Panics
    /// If `radius` is not a positive finite number. Scenario files are checked
    /// by `ScenarioConfig::validate` before they get here.
    pub fn new(x: NVec2, radius: f64, v: NVec2, color: impl Into<String>) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "body radius must be positive and finite, got {radius}"
        );
        Self {
            x,
            v,
            radius,
            m: PI * radius * radius,
            color: color.into(),
        }
    }

    /// Build a body launched from `(x, y)` at `angle` radians with `speed`
    pub fn launched(x: f64, y: f64, radius: f64, angle: f64, speed: f64, color: impl Into<String>) -> Self {
        Self::new(NVec2::new(x, y), radius, from_polar(angle, speed), color)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Display attribute, never read by the physics
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Read-only view of a body handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView<'a> {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'a str,
}

impl<'a> From<&'a Body> for BodyView<'a> {
    fn from(b: &'a Body) -> Self {
        Self {
            x: b.x.x,
            y: b.x.y,
            radius: b.radius,
            color: &b.color,
        }
    }
}

/// The arena and every body in it.
///
/// The body count is fixed at construction: `bodies_mut` hands out a slice, so
/// entries can be mutated in place but never added or removed.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    width: f64,
    height: f64,
    pub decay: f64, // velocity decay base per second, 1.0 = none
    pub t: f64,     // simulated time
}

impl World {
    pub fn new(bodies: Vec<Body>, width: f64, height: f64) -> Self {
        Self {
            bodies,
            width,
            height,
            decay: 1.0,
            t: 0.0,
        }
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Render read interface: `(x, y, radius, color)` per body, in order
    pub fn views(&self) -> Vec<BodyView<'_>> {
        self.bodies.iter().map(BodyView::from).collect()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).fold(NVec2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
