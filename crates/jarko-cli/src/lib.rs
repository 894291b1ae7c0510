//! CLI library components for `jarko`.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
