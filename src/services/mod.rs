pub mod filter;
pub mod registry;
pub mod significance;
pub mod web;

pub use filter::{ResizeCallback, ResizeFilter, Surface, WeakResizeFilter};
pub use registry::{Attach, Detach, ResizeRegistry};
pub use significance::{check_size, in_step};
