use std::time::Instant;

use crate::simulation::states::{Body, World};

/// Deterministic grid of `n` small bodies with assorted headings, no rand needed
pub fn grid_world(n: usize) -> World {
    let cols = (n as f64).sqrt().ceil().max(1.0) as usize;
    let spacing = 10.0;
    let radius = 2.0;
    let side = cols as f64 * spacing + spacing;

    let bodies = (0..n).map(|i| {
        let i_f = i as f64;
        let x = spacing + (i % cols) as f64 * spacing;
        let y = spacing + (i / cols) as f64 * spacing;
        Body::launched(x, y, radius, i_f * 0.37, 20.0 + (i_f * 0.13).sin() * 10.0, "grey")
    }).collect();

    World::new(bodies, side, side)
}

pub fn bench_step() {
    // Different body counts to test, brute-force pairs grow as n^2
    let ns = [5, 25, 100, 400, 1600];
    let steps = 200;
    let dt = 1.0 / 60.0;

    for n in ns {
        let mut world = grid_world(n);

        // Warm up
        world.step(dt);

        let mut contacts = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            contacts += world.step(dt).contacts;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:10.3} us, contacts = {contacts}", per_step * 1e6);
    }
}
