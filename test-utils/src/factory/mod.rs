//! Factory methods for creating test data.
//!
//! This module provides sample registry data with sensible defaults, reducing boilerplate in
//! tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! let test = TestBuilder::new()
//!     .with_movies(factory::movie::sample_movies())
//!     .build()?;
//!
//! let url = factory::movie::drive_share_url("abc123");
//! ```

pub mod helpers;
pub mod movie;
