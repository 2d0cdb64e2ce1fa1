//! Component showcase: catalog cards in the playground fragment open a
//! modal that hosts each demo page in an embedded frame.

pub mod actions;
pub mod cards;
pub mod modal;

pub use cards::wire_cards;
pub use modal::ShowcaseModal;
