pub mod api_utils;
pub mod dom;
pub mod icons;
pub mod mathjax;
pub mod modal_frame;
pub mod observers;
