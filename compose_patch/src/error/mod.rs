//! Error types produced while inlining and resolving patches.

mod constructors;
mod types;

pub use types::{ComposeError, ErrorCategory};

#[cfg(test)]
mod tests;
