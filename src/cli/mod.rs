//! CLI module for the lexalign command-line interface.
//!
//! This module loads the inputs a command needs, runs the library and hands
//! the result to the output formatters.

mod commands;
mod output;
pub mod types;

pub use commands::*;
