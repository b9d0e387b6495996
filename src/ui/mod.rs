pub mod island_page;
pub mod placement;
