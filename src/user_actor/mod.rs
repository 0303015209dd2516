//! User records held by the in-memory backend, including article tallies.

mod actions;
pub mod entity;

pub use actions::*;
pub use entity::*;
