//! Quire CLI library
//!
//! Wires quire-core to the local filesystem and the terminal: argument
//! parsing, configuration loading, output formatting, and the subcommands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod render;
