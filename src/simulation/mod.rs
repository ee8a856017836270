pub mod vector;
pub mod states;
pub mod params;
pub mod engine;
pub mod collision;
pub mod integrator;
pub mod step;
pub mod scenario;
