pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod window;

pub use clock::*;
pub use controller::*;
pub use input_adapter::*;
pub use window::*;
