pub mod api_pane;
pub mod authors;
pub mod loader;
pub mod showcase;
