//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps argument parsing and logging setup; this module hosts the
//! per-subcommand handlers so the entrypoint stays small.

pub(crate) mod commands;
