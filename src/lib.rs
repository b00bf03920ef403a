pub mod adapter;
pub mod aggregator;
pub mod cancel;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod registry;
pub mod runner;
pub mod scanner;
pub mod score;

pub use error::{CodeCheckerError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_CANCELLED: i32 = 130;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
