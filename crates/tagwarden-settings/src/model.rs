use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Policy spec schema v1, as embedded in an infrastructure spec document
/// under the `x-aws-inventory-rules` key.
///
/// This is a *user-facing* model: it is intentionally permissive so forward
/// compatibility is easy, and other top-level document keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySpecV1 {
    #[serde(default, rename = "x-aws-inventory-rules")]
    pub inventory_rules: InventoryRules,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InventoryRules {
    /// Required-tag rules, enforced in list order.
    #[serde(default)]
    pub required_tags: Vec<RequiredTag>,

    #[serde(default)]
    pub naming_convention: NamingConvention,

    #[serde(default)]
    pub lifecycle_policies: LifecyclePolicies,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequiredTag {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub required: bool,

    /// Restricts the requirement to a set of environments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_when: Option<RequiredWhen>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequiredWhen {
    #[serde(default)]
    pub env: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NamingConvention {
    /// Pattern template, e.g. `flowlogic-{env}-{service}`. Absent disables
    /// the naming check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LifecyclePolicies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_resources: Option<LifecyclePolicy>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LifecyclePolicy {
    #[serde(default)]
    pub auto_cleanup: bool,
}

/// Optional inventory config document schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InventoryConfigV1 {
    /// Product name used for the `<product>-<env>-` naming prefix. Takes
    /// precedence over a prefix derived from the spec's naming pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}
