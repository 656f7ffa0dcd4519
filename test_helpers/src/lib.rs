//! Test helpers shared across crates.
//!
//! This crate provides sample documents and composition sources used by
//! the `compose_patch` unit and integration tests.

pub mod documents;
pub mod objects;
