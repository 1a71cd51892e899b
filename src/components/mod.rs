pub mod resize_monitor;

pub use resize_monitor::{PanelMonitor, ResizeMonitor};
