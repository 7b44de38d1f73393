//! ferrofetch library
//!
//! A small system information fetch tool: collects host attributes with
//! per-field failure isolation and renders them next to ASCII art.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod utils;

pub use collectors::collect_all;
pub use data::{SystemInfo, NOT_APPLICABLE, UNKNOWN};
pub use error::{FetchError, Result};
