#![forbid(unsafe_code)]
//! sequery: composable lazy query operators over in-memory sequences.
//!
//! This crate re-exports the full public surface of the engine and core
//! crates; depend on it unless you need only one of the layers.

pub use sequery_core::compare::{Chain, Comparer, FnComparer, KeyComparer, Natural, Reverse};
pub use sequery_core::config::EngineConfig;
pub use sequery_core::equality::{ContentEq, EqualityComparer, FnEq, HashEq};
pub use sequery_core::error::{Error, Result};
pub use sequery_core::hash::content_hash64;

pub use sequery_engine::dictionary::Dictionary;
pub use sequery_engine::lookup::{Grouping, Lookup};
pub use sequery_engine::ordered::OrderedSequence;
pub use sequery_engine::sequence::{AsSequence, Sequence};
pub use sequery_engine::traits::{Cursor, Enumerator, State};
