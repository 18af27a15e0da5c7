//! # Player REST API
//!
//! HTTP surface for player records:
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/rest/players` | filtered, ordered page (JSON array) |
//! | GET | `/rest/players/count` | number of matches (JSON integer) |
//! | POST | `/rest/players` | created player |
//! | GET | `/rest/players/{id}` | one player |
//! | POST | `/rest/players/{id}` | updated player |
//! | DELETE | `/rest/players/{id}` | always 200, no body |

pub mod errors;
pub mod handler;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::PlayerHandler;
pub use server::RestServer;
