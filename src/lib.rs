pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod drive;
pub mod error;
pub mod policy;
pub mod progress;
pub mod report;
pub mod walker;

pub use error::{Result, ShareGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_TRAVERSAL_ERROR: i32 = 3;
pub const EXIT_DELIVERY_ERROR: i32 = 4;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
