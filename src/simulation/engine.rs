//! High-level runtime engine settings
//!
//! Selects the time source, frame pacing and renderer used when running a
//! `Scenario`

use crate::configuration::config::{ClockConfig, EngineConfig, RendererConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub clock: ClockConfig, // wall clock or fixed ticks
    pub frame_rate: f64, // target frames per second
    pub frames: Option<u64>, // stop after this many frames, None = forever
    pub renderer: RendererConfig, // headless log or bevy window
    pub report_every: u64, // log renderer summary period, in frames
}

impl From<EngineConfig> for Engine {
    fn from(e_cfg: EngineConfig) -> Self {
        Self {
            clock: e_cfg.clock,
            frame_rate: e_cfg.frame_rate,
            frames: e_cfg.frames,
            renderer: e_cfg.renderer,
            report_every: e_cfg.report_every,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineConfig::default().into()
    }
}
