//! # Player Storage
//!
//! The store executes predicates built by [`crate::query`] and owns id
//! assignment. [`PlayerStore`] is the seam; [`InMemoryPlayerStore`] is the
//! implementation the server runs with.

mod errors;
mod memory;
mod seed;
mod store;

pub use errors::{StorageError, StorageResult};
pub use memory::InMemoryPlayerStore;
pub use seed::{load_seed, parse_seed};
pub use store::PlayerStore;
