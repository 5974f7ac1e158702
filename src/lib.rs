//! Reverse index of key bindings found in configuration files.
//!
//! The scan phase walks a directory tree ([`crate::core::scan_tree`]) and feeds each
//! matching file into a [`crate::core::BindingIndex`]; the query phase
//! ([`crate::console::QuerySession`]) answers which settings bind a given key.

pub mod cli;
pub mod config;
pub mod console;
pub mod core;
