//! Collision detection and response for circular bodies
//!
//! Body/body contacts use the elastic impulse along the line of centers, body/wall
//! contacts reflect one velocity component. Detection is discrete: a fast body or
//! a large `dt` can tunnel through a thin body or a wall, and resolved bodies may
//! stay interpenetrated since positions are never corrected.

use super::states::Body;
use super::vector::{unit_or, NVec2};

/// Which arena wall a body is touching, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    Left,
    Right,
    Top,
    Bottom,
    None,
}

/// Outcome of a single body/body resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub normal: NVec2,
    pub impulse: f64,
    pub degenerate: bool, // centers coincided, fallback normal used
}

/// Normal used when two centers coincide exactly
pub fn fallback_normal() -> NVec2 {
    NVec2::new(1.0, 0.0)
}

impl Body {
    /// True when the circles touch or overlap, tangency included
    pub fn intersects(&self, other: &Body) -> bool {
        let d = self.x - other.x;
        let dist2 = d.x * d.x + d.y * d.y;
        let rsum = self.radius() + other.radius();
        dist2 <= rsum * rsum
    }

    /// First wall within one radius, checked left, right, top, bottom.
    /// A body in a corner only reports one side.
    pub fn boundary_side(&self, width: f64, height: f64) -> BoundarySide {
        let r = self.radius();
        if self.x.x <= r {
            BoundarySide::Left
        } else if self.x.x >= width - r {
            BoundarySide::Right
        } else if self.x.y <= r {
            BoundarySide::Top
        } else if self.x.y >= height - r {
            BoundarySide::Bottom
        } else {
            BoundarySide::None
        }
    }

    /// Reflect the velocity off `side` if the body is still heading into it.
    /// Returns whether the velocity changed.
    pub fn resolve_boundary_collision(&mut self, side: BoundarySide) -> bool {
        let (flip_x, flip_y) = match side {
            BoundarySide::Left => (self.v.x < 0.0, false),
            BoundarySide::Right => (self.v.x > 0.0, false),
            BoundarySide::Top => (false, self.v.y < 0.0),
            BoundarySide::Bottom => (false, self.v.y > 0.0),
            BoundarySide::None => (false, false),
        };
        if flip_x {
            self.v.x = -self.v.x;
        }
        if flip_y {
            self.v.y = -self.v.y;
        }
        flip_x || flip_y
    }

    /// Elastic impulse exchange with `other` along the line of centers.
    /// Conserves momentum and kinetic energy.
    pub fn resolve_ball_collision(&mut self, other: &mut Body) -> Contact {
        let separation = self.x - other.x;
        let degenerate = separation.norm() == 0.0;
        if degenerate {
            log::warn!(
                "coincident centers at ({}, {}), using fallback normal",
                self.x.x, self.x.y
            );
        }
        let normal = unit_or(separation, fallback_normal());

        let inv_mass_sum = 1.0 / self.mass() + 1.0 / other.mass();
        let relative = self.v - other.v;
        let impulse = (normal * 2.0).dot(&relative) / inv_mass_sum;

        self.v -= normal * (impulse / self.mass());
        other.v += normal * (impulse / other.mass());

        Contact { normal, impulse, degenerate }
    }
}

/// Resolve the pair `(i, j)` of `bodies` in place, `i != j`
pub fn resolve_pair(bodies: &mut [Body], i: usize, j: usize) -> Contact {
    debug_assert!(i != j, "a body cannot collide with itself");
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = bodies.split_at_mut(hi);
    let (a, b) = (&mut head[lo], &mut tail[0]);
    if i < j {
        a.resolve_ball_collision(b)
    } else {
        b.resolve_ball_collision(a)
    }
}
