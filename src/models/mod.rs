pub mod dimensions;
pub mod error;
pub mod options;

pub use dimensions::{Dimensions, SurfaceKey};
pub use error::ResizeError;
pub use options::{ResizeOptions, ResizeType};
