//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the largest per-frame step the driver will hand to `World::step`,
//! - the velocity decay base applied after every step

use crate::configuration::config::ParametersConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub max_dt: f64, // largest dt per frame, seconds
    pub decay: f64, // velocity multiplier per second, 1.0 = no damping
}

impl From<ParametersConfig> for Parameters {
    fn from(p_cfg: ParametersConfig) -> Self {
        Self {
            max_dt: p_cfg.max_dt,
            decay: p_cfg.decay,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        ParametersConfig::default().into()
    }
}
