//! Command-line interface module.

mod args;
pub mod build;
mod common;
pub mod convert;

pub use args::{Cli, Commands};
