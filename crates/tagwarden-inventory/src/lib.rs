//! Inventory document adapter: parse resource-inventory JSON into the domain
//! model.
//!
//! This crate parses document text supplied by the caller; reading files is
//! the CLI's job.

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use tagwarden_domain::model::ResourceRecord;

/// Parse an inventory document: either a bare array of records or an object
/// with a `resources` key holding that array.
pub fn parse_inventory(text: &str) -> anyhow::Result<Vec<ResourceRecord>> {
    parse::parse_inventory(text).context("parse inventory JSON")
}
