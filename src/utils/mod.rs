pub mod font;
pub mod logging;
