//! CLI support for the `ugraph` binary.

pub mod commands;
