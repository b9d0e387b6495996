pub mod log;
pub mod loggable;
