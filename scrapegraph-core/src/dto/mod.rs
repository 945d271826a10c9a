//! Data transfer objects
//!
//! Typed request parameters and response shapes for each API endpoint.
//! These structs only shuttle data; the job lifecycle logic never looks
//! inside them.

pub mod account;
pub mod crawl;
pub mod schema;
pub mod scrape;
