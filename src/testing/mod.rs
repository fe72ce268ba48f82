//! Shared fixtures and helpers for unit tests. Compiled only under test.

pub mod fixtures;
pub mod helpers;
