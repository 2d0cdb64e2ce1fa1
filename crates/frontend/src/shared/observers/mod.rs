pub mod section_tracker;

pub use section_tracker::SectionTracker;
