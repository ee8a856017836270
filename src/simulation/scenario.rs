//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - world state (`World` with every body at t = 0)
//!
//! With the `viewer` feature the scenario is inserted into Bevy as a `Resource`

use anyhow::Result;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, World};

/// Runtime bundle: how to drive the world, and the world itself
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: World,
}

impl Scenario {
    /// Validate `cfg` and map it to runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body`, velocity from angle + speed
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| {
            Body::launched(bc.x, bc.y, bc.radius, bc.angle, bc.speed, bc.color.as_str())
        }).collect();

        // Parameters and Engine (runtime) from their config sections
        let parameters = Parameters::from(cfg.parameters);
        let engine = Engine::from(cfg.engine);

        let world = World::new(bodies, cfg.arena.width, cfg.arena.height)
            .with_decay(parameters.decay);

        log::info!(
            "scenario: {} bodies in a {} x {} arena",
            world.bodies().len(), world.width(), world.height()
        );

        Ok(Self {
            engine,
            parameters,
            world,
        })
    }

    /// Five balls of assorted sizes in an 800 x 600 arena
    pub fn demo() -> Self {
        let bodies = vec![
            Body::launched(250.0, 150.0, 2.0, 1.0, 100.0, "red"),
            Body::launched(550.0, 300.0, 3.0, 2.0, 200.0, "purple"),
            Body::launched(100.0, 75.0, 4.0, 3.0, 100.0, "blue"),
            Body::launched(300.0, 250.0, 50.0, 2.0, 50.0, "green"),
            Body::launched(400.0, 200.0, 15.0, 1.0, 75.0, "orange"),
        ];

        Self {
            engine: Engine::default(),
            parameters: Parameters::default(),
            world: World::new(bodies, 800.0, 600.0),
        }
    }
}
