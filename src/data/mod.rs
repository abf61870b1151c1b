//! Persistence layer.
//!
//! This module contains the repository that loads and saves the movie registry file.
//! Repositories deal in domain models from `crate::model` so the service layer never sees the
//! on-disk representation.

pub mod registry;

#[cfg(test)]
mod test;
