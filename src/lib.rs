//! playerbase - a filtered, paged REST registry of game characters
//!
//! The interesting part is [`query`]: it turns an open set of optional
//! filter parameters into one conjunctive [`query::Predicate`], resolves the
//! sort key and the page, and hands all three to a [`storage::PlayerStore`].

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod player;
pub mod query;
pub mod rest_api;
pub mod storage;
