//! Domain models shared by the data, service and bot layers.
//!
//! - `movie` - Movie locators and registry entries
//! - `registry` - Ordered in-memory movie registry
//! - `session` - Per-guild watch session records

pub mod movie;
pub mod registry;
pub mod session;
