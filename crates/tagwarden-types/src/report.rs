use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for tagwarden reports.
pub const SCHEMA_REPORT_V1: &str = "tagwarden.report.v1";

/// Detected deployment environment of a resource.
///
/// Exactly one environment is assigned per resource; `Untagged` means neither
/// the `Env` tag nor the resource name yielded a match.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Prod,
    Staging,
    Dev,
    Untagged,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Staging => "staging",
            Environment::Dev => "dev",
            Environment::Untagged => "untagged",
        }
    }
}

/// Final compliance category of a resource.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Compliant,
    NonCompliant,
    Untagged,
    Expired,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Compliant => "compliant",
            Category::NonCompliant => "non_compliant",
            Category::Untagged => "untagged",
            Category::Expired => "expired",
        }
    }
}

/// Per-resource classification result.
///
/// Invariant: `compliant` is true iff `violations` is empty and the category
/// is neither `untagged` nor `expired`. Categories `untagged` and `expired`
/// always carry `requires_action = true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Classification {
    pub arn: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub env: Environment,
    pub category: Category,
    pub violations: Vec<String>,
    pub compliant: bool,
    /// Normalized `ExpiresAt` timestamp, when the tag was present and parsed.
    #[schemars(with = "Option<String>")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    pub requires_action: bool,
}

/// Per-environment resource counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnvCounts {
    pub prod: u32,
    pub staging: u32,
    pub dev: u32,
    pub untagged: u32,
}

impl EnvCounts {
    pub fn bump(&mut self, env: Environment) {
        match env {
            Environment::Prod => self.prod += 1,
            Environment::Staging => self.staging += 1,
            Environment::Dev => self.dev += 1,
            Environment::Untagged => self.untagged += 1,
        }
    }
}

/// Aggregate counters for one report.
///
/// `compliant` and `non_compliant` partition the inventory; `expired` and
/// `untagged` count categories independently and overlap with the partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub compliant: u32,
    pub non_compliant: u32,
    pub expired: u32,
    pub untagged: u32,
    pub by_env: EnvCounts,
}

/// One entry in the flat violations list: a resource with at least one
/// violation, in input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViolationEntry {
    pub arn: String,
    pub name: String,
    pub env: Environment,
    pub violations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The emitted report envelope: one instance per run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub total_resources: u32,
    /// Classifications grouped by final category; list order is input order.
    pub classifications: BTreeMap<Category, Vec<Classification>>,
    pub summary: Summary,
    pub violations: Vec<ViolationEntry>,
}
