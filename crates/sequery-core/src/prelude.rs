//! Convenient re-exports for downstream crates.

pub use crate::compare::{Chain, Comparer, FnComparer, KeyComparer, Natural, Reverse};
pub use crate::config::EngineConfig;
pub use crate::equality::{ContentEq, EqualityComparer, FnEq, HashEq};
pub use crate::error::{Error, Result};
pub use crate::hash::content_hash64;
