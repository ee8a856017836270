pub mod render;
#[cfg(feature = "viewer")]
pub mod ballsim_vis2d;
