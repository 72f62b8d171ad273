//! Read entities definitions.

pub mod location;
pub mod room;
