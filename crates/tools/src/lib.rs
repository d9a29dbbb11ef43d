//! Shared pieces of the `simulate` and `sweep` binaries.

pub mod config;

pub use config::{SimConfig, Strategy};
