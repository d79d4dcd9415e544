pub mod cli;
pub mod common;
pub mod compositor;
pub mod config;
pub mod diagnostics;
pub mod helpers;
pub mod overlay;
pub mod persist;
pub mod pixels;
pub mod render;
pub mod tables;
pub mod units;
