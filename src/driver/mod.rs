pub mod clock;
pub mod frame;
