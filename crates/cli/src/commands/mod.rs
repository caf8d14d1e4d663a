//! Command handlers for each subcommand.

pub mod average;
pub mod config;
pub mod slug;
