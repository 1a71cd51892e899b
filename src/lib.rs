//! Filtered, debounced resize notifications for browser windows and elements.
//!
//! A [`services::filter::ResizeFilter`] sits between a surface's raw resize
//! notifications and a user callback. It drops notifications whose size
//! change is not significant (minimum delta, step boundaries, watched axis)
//! and optionally debounces the rest, so the callback runs once per quiet
//! period with the latest event.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
