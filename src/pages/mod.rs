//! Page-level components.

pub mod room;
