//! Human-readable renderings of a tagwarden report.

#![forbid(unsafe_code)]

mod markdown;

pub use markdown::render_markdown;
