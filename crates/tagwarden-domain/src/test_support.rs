use crate::model::ResourceRecord;
use crate::rules::{EffectiveRules, TagRule};
use std::collections::BTreeMap;
use time::macros::datetime;
use time::OffsetDateTime;

pub fn record(arn: &str, resource_type: &str, name: &str, tags: &[(&str, &str)]) -> ResourceRecord {
    ResourceRecord {
        arn: arn.to_string(),
        resource_type: resource_type.to_string(),
        name: name.to_string(),
        tags: tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn rules_with(required_tags: Vec<TagRule>, dev_auto_cleanup: bool) -> EffectiveRules {
    EffectiveRules {
        required_tags,
        product_prefix: "flowlogic-".to_string(),
        naming_pattern: Some("flowlogic-{env}-{service}".to_string()),
        dev_auto_cleanup,
    }
}

/// Fixed "now" so expiry tests are deterministic.
pub fn test_now() -> OffsetDateTime {
    datetime!(2025-06-01 12:00:00 UTC)
}
