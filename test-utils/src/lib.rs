//! Movienight Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the movienight
//! bot. This crate offers a builder pattern for creating test contexts backed by a temporary
//! directory holding a seeded movie registry file.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the registry file a test starts from
//! - **TestContext**: Test environment owning the temporary directory and registry path
//! - **TestError**: Error types that can occur during test setup
//! - **factory / serenity**: Sample data and mock Serenity objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_registry_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_movie("Superman", "https://drive.google.com/file/d/abc123/view")
//!         .build()?;
//!
//!     let path = test.registry_path();
//!     // Load the registry from `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
