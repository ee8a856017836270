//! The explicit frame loop
//!
//! Each frame: read the clock, step the world, render, then wait for the next
//! tick. Everything runs on the calling thread and each stage finishes before
//! the next one starts, so the renderer always sees a completed step.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::driver::clock::{FrameClock, FrameTimer};
use crate::simulation::states::World;
use crate::simulation::step::StepReport;
use crate::visualization::render::Renderer;

/// Totals over a `FrameDriver::run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub contacts: usize,
    pub degenerate: usize,
    pub wall_bounces: usize,
    pub clamped_frames: u64,
}

pub struct FrameDriver<C, R> {
    clock: C,
    renderer: R,
    timer: FrameTimer,
    period: Option<Duration>, // None = no pacing, run flat out
    frame: u64,
}

impl<C: FrameClock, R: Renderer> FrameDriver<C, R> {
    pub fn new(clock: C, renderer: R, max_dt: f64) -> Self {
        Self {
            clock,
            renderer,
            timer: FrameTimer::new(max_dt),
            period: None,
            frame: 0,
        }
    }

    /// Sleep between frames so they start `1/frame_rate` seconds apart
    pub fn with_pacing(mut self, frame_rate: f64) -> Self {
        self.period = Some(Duration::from_secs_f64(1.0 / frame_rate));
        self
    }

    /// One frame: elapsed time -> step -> render
    pub fn tick(&mut self, world: &mut World) -> Result<StepReport> {
        let now = self.clock.now();
        let dt = self.timer.advance(now)?;
        let report = world.step(dt);
        self.renderer.render(self.frame, &world.views())?;
        self.frame += 1;
        Ok(report)
    }

    /// Run until `frames` frames have been produced, or forever when `None`
    pub fn run(&mut self, world: &mut World, frames: Option<u64>) -> Result<RunSummary> {
        log::info!(
            "driver: starting with {} bodies, frame limit {:?}",
            world.bodies().len(), frames
        );

        let mut summary = RunSummary::default();
        while frames.map_or(true, |limit| summary.frames < limit) {
            let started = Instant::now();

            let report = self.tick(world)?;
            summary.frames += 1;
            summary.contacts += report.contacts;
            summary.degenerate += report.degenerate;
            summary.wall_bounces += report.wall_bounces;

            if let Some(period) = self.period {
                let spent = started.elapsed();
                if spent < period {
                    thread::sleep(period - spent);
                }
            }
        }
        summary.clamped_frames = self.timer.clamped();

        log::info!("driver: finished {:?}", summary);
        Ok(summary)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
