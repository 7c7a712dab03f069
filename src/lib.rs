pub mod camera;
pub mod cli;
pub mod core;
pub mod renderer;
pub mod shader;
pub mod types;
pub mod window;

pub use camera::{CameraInput, CameraState, FIXED_DT};
pub use types::FrameUniform;
