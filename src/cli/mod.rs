//! Command implementations behind the `graphq` binary.

pub mod commands;
