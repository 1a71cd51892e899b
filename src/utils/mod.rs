pub mod debounce;
pub mod logger;

pub use debounce::{Debouncer, Scheduler, TimeoutScheduler};
