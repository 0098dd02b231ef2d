//! Toroidal Game of Life engine.
//!
//! This crate owns the grid state and the generational step rule. It is
//! purely passive: an external driver calls [`Universe::tick`] once per
//! frame, applies user input through the mutation operations, and reads
//! [`Universe::cells`] to paint the result.

pub mod patterns;
pub mod universe;

pub use patterns::Pattern;
pub use universe::Universe;
