pub mod app_config;
pub mod dispatcher;
pub mod gui_manager;
pub mod system;
pub mod ticker;
