//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]      – size of the rectangular arena
//! - [`ParametersConfig`] – numerical parameters (optional)
//! - [`EngineConfig`]     – clock, frame pacing and renderer (optional)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! arena:
//!   width: 800.0
//!   height: 600.0
//!
//! parameters:
//!   max_dt: 0.05      # largest step per frame, seconds
//!   decay: 1.0        # velocity decay base per second, 1.0 = none
//!
//! engine:
//!   clock: system     # or "fixed" for deterministic 1/frame_rate ticks
//!   frame_rate: 60.0
//!   frames: 600       # omit to run forever
//!   renderer: log     # or "viewer" (needs the `viewer` feature)
//!   report_every: 60
//!
//! bodies:
//!   - x: 250.0
//!     y: 150.0
//!     radius: 2.0
//!     angle: 1.0      # launch direction, radians
//!     speed: 100.0    # arena units per second
//!     color: red
//! ```
//!
//! Everything except `arena` and `bodies` has defaults. [`ScenarioConfig::validate`]
//! rejects values the physics cannot work with before a runtime scenario is built.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Where frame timestamps come from
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockConfig {
    #[serde(rename = "system")] // monotonic wall clock, frames paced to frame_rate
    #[default]
    System,

    #[serde(rename = "fixed")] // timestamps advance by exactly 1/frame_rate, no sleeping
    Fixed,
}

/// Who presents body state each frame
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererConfig {
    #[serde(rename = "log")] // headless, body state goes to the log
    #[default]
    Log,

    #[serde(rename = "viewer")] // bevy window
    Viewer,
}

/// Arena bounds, origin top-left
#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub max_dt: f64, // clamp for the per-frame step
    pub decay: f64,  // velocity decay hook, 1.0 keeps energy
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.05,
            decay: 1.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub clock: ClockConfig,
    pub frame_rate: f64,
    pub frames: Option<u64>,
    pub renderer: RendererConfig,
    pub report_every: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::System,
            frame_rate: 60.0,
            frames: None,
            renderer: RendererConfig::Log,
            report_every: 60,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    pub radius: f64, // mass is derived from this
    pub angle: f64, // launch direction, radians
    pub speed: f64, // launch speed, arena units per second
    pub color: String,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Check everything the physics and the driver rely on
    pub fn validate(&self) -> Result<()> {
        let ArenaConfig { width, height } = self.arena;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            bail!("arena must have a positive finite size, got {width} x {height}");
        }

        let p = &self.parameters;
        if !(p.max_dt.is_finite() && p.max_dt > 0.0) {
            bail!("max_dt must be positive, got {}", p.max_dt);
        }
        if !(p.decay.is_finite() && p.decay >= 0.0) {
            bail!("decay must be a non-negative number, got {}", p.decay);
        }

        let e = &self.engine;
        if !(e.frame_rate.is_finite() && e.frame_rate > 0.0) {
            bail!("frame_rate must be positive, got {}", e.frame_rate);
        }
        if e.report_every == 0 {
            bail!("report_every must be at least 1");
        }

        for (i, b) in self.bodies.iter().enumerate() {
            if !(b.radius.is_finite() && b.radius > 0.0) {
                bail!("body {i} ({}): radius must be positive, got {}", b.color, b.radius);
            }
            for (name, value) in [("x", b.x), ("y", b.y), ("angle", b.angle), ("speed", b.speed)] {
                if !value.is_finite() {
                    bail!("body {i} ({}): {name} is not finite", b.color);
                }
            }
            if b.x < 0.0 || b.x > width || b.y < 0.0 || b.y > height {
                bail!("body {i} ({}): center ({}, {}) lies outside the arena", b.color, b.x, b.y);
            }
        }

        for (i, a) in self.bodies.iter().enumerate() {
            for (j, b) in self.bodies.iter().enumerate().skip(i + 1) {
                if a.x == b.x && a.y == b.y {
                    bail!("bodies {i} and {j} share the center ({}, {})", a.x, a.y);
                }
            }
        }

        Ok(())
    }
}
