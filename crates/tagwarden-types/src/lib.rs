//! Stable DTOs used across the tagwarden workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted compliance report
//! - the stable schema identifier
//! - small display helpers for environments and categories

#![forbid(unsafe_code)]

pub mod report;

pub use report::{
    Category, Classification, EnvCounts, Environment, Report, Summary, ToolMeta, ViolationEntry,
    SCHEMA_REPORT_V1,
};
