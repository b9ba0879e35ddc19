use crate::model::{InventoryConfigV1, PolicySpecV1};
use tagwarden_domain::rules::{EffectiveRules, TagRule};
use tagwarden_types::Environment;

/// CLI-level overrides applied on top of the documents.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub product: Option<String>,
}

pub fn resolve_rules(
    spec: PolicySpecV1,
    config: InventoryConfigV1,
    overrides: Overrides,
) -> EffectiveRules {
    let rules = spec.inventory_rules;

    let required_tags = rules
        .required_tags
        .into_iter()
        .map(|tag| {
            // Tokens that name no known environment never match a detected
            // environment, so they are dropped from the set.
            let required_when = tag.required_when.map(|when| {
                when.env
                    .iter()
                    .filter_map(|e| parse_environment(e))
                    .collect()
            });
            TagRule {
                name: tag.name,
                required: tag.required,
                required_when,
            }
        })
        .collect();

    let pattern = rules.naming_convention.pattern;
    let product = overrides.product.or(config.product);
    let product_prefix = derive_product_prefix(pattern.as_deref(), product.as_deref());

    EffectiveRules {
        required_tags,
        product_prefix,
        naming_pattern: pattern,
        dev_auto_cleanup: rules
            .lifecycle_policies
            .dev_resources
            .map(|p| p.auto_cleanup)
            .unwrap_or(false),
    }
}

/// `"<product>-"` head for name markers and the naming prefix.
///
/// An explicit product wins; otherwise the text before the pattern's `{env}`
/// placeholder, then the pattern's first dash-segment. With nothing
/// configured the head is empty and name-based environment inference is
/// disabled.
fn derive_product_prefix(pattern: Option<&str>, product: Option<&str>) -> String {
    if let Some(product) = product {
        return format!("{product}-");
    }
    if let Some(pattern) = pattern {
        if let Some((head, _)) = pattern.split_once("{env}") {
            return head.to_string();
        }
        if let Some((first, _)) = pattern.split_once('-') {
            return format!("{first}-");
        }
    }
    String::new()
}

/// Environment tokens accepted in `required_when` sets. Matching is exact:
/// detected environments serialize lowercase, so a case variant like `Dev`
/// is as unmatched as `qa`.
fn parse_environment(v: &str) -> Option<Environment> {
    match v {
        "prod" | "production" => Some(Environment::Prod),
        "staging" | "stage" => Some(Environment::Staging),
        "dev" | "development" => Some(Environment::Dev),
        "untagged" => Some(Environment::Untagged),
        _ => None,
    }
}
