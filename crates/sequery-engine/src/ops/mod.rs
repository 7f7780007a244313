//! One module per combinator cursor.

pub mod concat;
pub mod distinct;
pub mod filter;
pub mod flatten;
pub mod join;
pub mod order;
pub mod partition;
pub mod project;
pub mod setops;
pub mod zip;
