//! Pure classification (no IO).
//!
//! Input: resource records and effective rules constructed elsewhere.
//! Output: per-resource classifications folded into a domain report.

#![forbid(unsafe_code)]

pub mod model;
pub mod report;
pub mod rules;

pub mod checks;
mod engine;

pub use engine::{classify, evaluate};

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod proptest;
