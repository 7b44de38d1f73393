//! Shared helpers for collectors

pub mod command;
pub mod file;
pub mod parsing;
