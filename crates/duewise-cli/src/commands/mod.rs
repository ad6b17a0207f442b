//! CLI subcommands.

pub mod next;
pub mod rank;

mod common;
