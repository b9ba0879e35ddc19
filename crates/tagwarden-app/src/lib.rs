//! Use case orchestration for tagwarden.
//!
//! This crate provides the application layer: it coordinates the settings,
//! inventory, domain, and render layers. The CLI crate depends on this; it
//! only handles argument parsing and file IO.

#![forbid(unsafe_code)]

mod classify;
mod render;

pub use classify::{run_classify, ClassifyInput, ClassifyOutput};
pub use render::{serialize_report, write_report, write_text};
