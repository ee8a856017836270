pub mod simulation;
pub mod configuration;
pub mod driver;
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::NVec2;
pub use simulation::states::{Body, BodyView, World};
pub use simulation::collision::{BoundarySide, Contact};
pub use simulation::step::StepReport;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ArenaConfig, BodyConfig, ClockConfig, EngineConfig, ParametersConfig, RendererConfig, ScenarioConfig};

pub use driver::clock::{FixedClock, FrameClock, FrameTimer, ScriptedClock, SystemClock};
pub use driver::frame::{FrameDriver, RunSummary};

pub use visualization::render::{LogRenderer, RecordingRenderer, Renderer};
#[cfg(feature = "viewer")]
pub use visualization::ballsim_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
