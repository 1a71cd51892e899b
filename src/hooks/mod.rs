pub mod use_window_resize;

pub use use_window_resize::{use_element_resize, use_window_resize, use_window_size};
