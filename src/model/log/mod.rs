pub mod action;
pub mod system;
pub mod ui;
