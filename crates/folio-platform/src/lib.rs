//! Platform runner.
//!
//! The host environment's jobs — drive frames, dispatch scroll input, advance
//! the animation clock, and deliver viewport intersections — live here. The
//! only runner shipped is the headless one: it plays the whole session on a
//! virtual clock, which makes runs reproducible byte for byte.

pub mod config;
pub mod headless;

pub use config::{ConfigError, HeadlessConfig};
pub use headless::{HeadlessRunner, RunReport};
