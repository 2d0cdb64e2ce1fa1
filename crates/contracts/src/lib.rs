pub mod errors;
pub mod site;
pub mod view_state;
pub mod viewport;
