//! Policy-spec and config parsing plus rule resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves documents
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{
    InventoryConfigV1, InventoryRules, LifecyclePolicies, LifecyclePolicy, NamingConvention,
    PolicySpecV1, RequiredTag, RequiredWhen,
};
pub use resolve::Overrides;

use tagwarden_domain::rules::EffectiveRules;

/// Parse the policy spec document (`infrastructure-spec.yaml` or equivalent)
/// into a typed model. Unknown keys are ignored.
pub fn parse_spec_yaml(input: &str) -> anyhow::Result<PolicySpecV1> {
    let spec: PolicySpecV1 = serde_yaml::from_str(input)?;
    Ok(spec)
}

/// Parse the optional inventory config document into a typed model.
pub fn parse_config_yaml(input: &str) -> anyhow::Result<InventoryConfigV1> {
    let cfg: InventoryConfigV1 = serde_yaml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective rules the engine enforces (spec + config + overrides).
///
/// Resolution never fails: unknown `required_when` environment tokens are
/// dropped from the set, so the requirement they guard is simply waived.
pub fn resolve_rules(
    spec: PolicySpecV1,
    config: InventoryConfigV1,
    overrides: Overrides,
) -> EffectiveRules {
    resolve::resolve_rules(spec, config, overrides)
}
