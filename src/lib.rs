#![warn(clippy::all)]
pub mod contract;
pub mod core;
pub mod execute;
pub mod instantiate;
pub mod migrate;
pub mod query;
pub mod service;
pub mod util;
pub mod validation;

// Conditional modules
#[cfg(test)]
pub mod testutil;
