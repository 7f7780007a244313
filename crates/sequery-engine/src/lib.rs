#![forbid(unsafe_code)]
//! sequery-engine: the cursor contract, the sequence facade, every
//! combinator, ordered sequences, and the keyed containers.
//!
//! Design intent:
//! - Everything is synchronous and single-threaded. Handles are `Rc`-based
//!   and a sequence owns exactly one shared cursor.
//! - Combinators capture their upstream cursors once at construction, and
//!   `reset` propagates downward instead of re-fetching.
//! - Operators that must materialize (probe sets, lookups, ordering
//!   buffers) do so eagerly and say so in their docs.

pub mod dictionary;
pub mod lookup;
pub mod ordered;
pub mod sequence;
pub mod sources;
pub mod traits;

pub mod ops;

mod aggregate;

pub use dictionary::Dictionary;
pub use lookup::{Grouping, Lookup};
pub use ordered::OrderedSequence;
pub use sequence::{AsSequence, Sequence};
pub use traits::{Cursor, Enumerator, State};
