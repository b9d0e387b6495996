pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod log;
pub mod stopwatch;
