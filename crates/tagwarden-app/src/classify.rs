//! The classify use case: resolve rules, classify the inventory, and wrap the
//! result in the report envelope.

use anyhow::Context;
use tagwarden_domain::rules::EffectiveRules;
use tagwarden_settings::{InventoryConfigV1, Overrides, PolicySpecV1};
use tagwarden_types::{Report, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the classify use case.
#[derive(Clone, Debug)]
pub struct ClassifyInput<'a> {
    /// Policy spec document contents (empty string means default rules).
    pub spec_text: &'a str,
    /// Config document contents (empty string if the file was not found).
    pub config_text: &'a str,
    /// Inventory document contents.
    pub inventory_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the classify use case.
#[derive(Clone, Debug)]
pub struct ClassifyOutput {
    /// The generated report.
    pub report: Report,
    /// The resolved rules that were enforced.
    pub rules: EffectiveRules,
}

/// Run the classify use case: parse documents, resolve rules, classify every
/// record, and aggregate the report.
pub fn run_classify(input: ClassifyInput<'_>) -> anyhow::Result<ClassifyOutput> {
    let spec = if input.spec_text.trim().is_empty() {
        PolicySpecV1::default()
    } else {
        tagwarden_settings::parse_spec_yaml(input.spec_text).context("parse policy spec")?
    };

    let config = if input.config_text.trim().is_empty() {
        InventoryConfigV1::default()
    } else {
        tagwarden_settings::parse_config_yaml(input.config_text).context("parse config")?
    };

    let rules = tagwarden_settings::resolve_rules(spec, config, input.overrides.clone());

    let records = tagwarden_inventory::parse_inventory(input.inventory_text)?;

    let now = OffsetDateTime::now_utc();
    let domain = tagwarden_domain::evaluate(&records, &rules, now);

    let report = Report {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "tagwarden".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        timestamp: now,
        total_resources: domain.total_resources,
        classifications: domain.classifications,
        summary: domain.summary,
        violations: domain.violations,
    };

    Ok(ClassifyOutput { report, rules })
}
