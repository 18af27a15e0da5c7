//! # Player Query Engine
//!
//! Turns the query string of a listing or counting request into something the
//! store can execute:
//!
//! - [`Criteria`]: the optional filter values a request supplied
//! - [`Predicate`]: the conjunction of one condition per supplied criterion
//! - [`PlayerOrder`] / [`SortSpec`]: the single ascending sort field
//! - [`PageSpec`]: zero-based page number and page size
//!
//! Nothing here touches storage; every step is a pure translation.

pub mod criteria;
pub mod errors;
pub mod order;
pub mod page;
pub mod predicate;

pub use criteria::{Bounds, Criteria, ListQuery};
pub use errors::{QueryError, QueryResult};
pub use order::{PlayerOrder, SortSpec};
pub use page::{PageSpec, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
pub use predicate::{Condition, FieldValue, PlayerField, Predicate};
