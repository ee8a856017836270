//! Render read interface
//!
//! Renderers receive `(x, y, radius, color)` per body once per frame, after the
//! step has completed, and never see anything else.

use anyhow::Result;

use crate::simulation::states::BodyView;

pub trait Renderer {
    fn render(&mut self, frame: u64, bodies: &[BodyView<'_>]) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, frame: u64, bodies: &[BodyView<'_>]) -> Result<()> {
        (**self).render(frame, bodies)
    }
}

/// Headless renderer: body state goes to the log.
/// Every `every`-th frame is logged at info, the rest at trace.
pub struct LogRenderer {
    every: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1) }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: u64, bodies: &[BodyView<'_>]) -> Result<()> {
        let level = if frame % self.every == 0 {
            log::Level::Info
        } else {
            log::Level::Trace
        };
        if !log::log_enabled!(level) {
            return Ok(());
        }
        for (i, b) in bodies.iter().enumerate() {
            log::log!(
                level,
                "frame {frame:6} body {i} [{}] at ({:8.2}, {:8.2}) r={}",
                b.color, b.x, b.y, b.radius
            );
        }
        Ok(())
    }
}

/// Owned copy of a `BodyView`
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBody {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

/// Keeps every frame it is asked to draw
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Vec<RenderedBody>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, _frame: u64, bodies: &[BodyView<'_>]) -> Result<()> {
        self.frames.push(bodies.iter().map(|b| RenderedBody {
            x: b.x,
            y: b.y,
            radius: b.radius,
            color: b.color.to_string(),
        }).collect());
        Ok(())
    }
}
