pub mod core;
pub mod launcher;
