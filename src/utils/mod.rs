//! Utility modules: build info, frame timing, logging, persistence.

pub mod build_info;
pub mod frame_clock;
pub mod logging;
pub mod persistence;

pub use build_info::*;
