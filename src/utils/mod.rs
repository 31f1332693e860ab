//! Leaf utilities shared by the feed modules.

pub mod date;
pub mod xml;
