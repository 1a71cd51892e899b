/// Configuration constants for the library and demo app
pub struct Config;

impl Config {
    /// DOM event the window filter subscribes to
    pub const RESIZE_EVENT: &'static str = "resize";

    /// `log` target used by every record this crate emits
    pub const LOG_TARGET: &'static str = "window_resize";

    /// Debounce used by the demo app (milliseconds)
    pub const DEMO_TIMEOUT_MS: u32 = 150;

    /// Width breakpoints used by the demo app's stepped monitor
    pub const DEMO_WIDTH_STEPS: [i32; 2] = [768, 1024];
}
