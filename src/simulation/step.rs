//! The per-frame world transition
//!
//! Order matters and is fixed: integrate, then body/body pairs in index order,
//! then walls, then the decay hook.

use super::collision::resolve_pair;
use super::integrator::{apply_decay, euler_integrator};
use super::states::World;

/// What happened during one `World::step`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: usize, // body/body pairs resolved
    pub degenerate: usize, // of those, pairs with coincident centers
    pub wall_bounces: usize, // velocity components actually reflected
}

impl World {
    /// Advance the whole world by `dt` seconds
    pub fn step(&mut self, dt: f64) -> StepReport {
        let mut report = StepReport::default();

        euler_integrator(self, dt);

        // Each unordered pair is visited once. A body can be hit again by a
        // later pair using the velocity it just received.
        let n = self.bodies().len();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                let bodies = self.bodies_mut();
                if bodies[i].intersects(&bodies[j]) {
                    let contact = resolve_pair(bodies, i, j);
                    report.contacts += 1;
                    if contact.degenerate {
                        report.degenerate += 1;
                    }
                }
            }
        }

        let (width, height) = (self.width(), self.height());
        for b in self.bodies_mut() {
            let side = b.boundary_side(width, height);
            if b.resolve_boundary_collision(side) {
                report.wall_bounces += 1;
            }
        }

        apply_decay(self, dt);

        log::trace!("step: t={:.4} dt={:.4} {:?}", self.t, dt, report);
        report
    }
}
