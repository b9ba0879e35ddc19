//! Property-based tests for the classification engine.
//!
//! These verify the report invariants over arbitrary inventories:
//! - the compliant flag tracks violations and terminal categories
//! - untagged/expired always require action
//! - classification is deterministic

use crate::engine::classify;
use crate::model::ResourceRecord;
use crate::rules::{EffectiveRules, TagRule};
use crate::test_support::test_now;
use proptest::prelude::*;
use std::collections::BTreeMap;
use tagwarden_types::{Category, Environment};

fn arb_tag_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Env".to_string()),
        Just("Owner".to_string()),
        Just("ExpiresAt".to_string()),
        "[A-Za-z][A-Za-z0-9]{0,11}",
    ]
}

fn arb_tag_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("prod".to_string()),
        Just("dev".to_string()),
        Just("2020-01-01T00:00:00Z".to_string()),
        Just("2099-01-01T00:00:00Z".to_string()),
        "[ -~]{0,24}",
    ]
}

fn arb_record() -> impl Strategy<Value = ResourceRecord> {
    (
        "[ -~]{0,40}",
        "[ -~]{0,40}",
        prop::collection::btree_map(arb_tag_key(), arb_tag_value(), 0..6),
    )
        .prop_map(|(arn, name, tags)| ResourceRecord {
            arn,
            resource_type: "AWS::S3::Bucket".to_string(),
            name,
            tags,
        })
}

fn arb_rules() -> impl Strategy<Value = EffectiveRules> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(dev_auto_cleanup, naming, owner_required)| EffectiveRules {
            required_tags: vec![TagRule {
                name: "Owner".to_string(),
                required: owner_required,
                required_when: None,
            }],
            product_prefix: "flowlogic-".to_string(),
            naming_pattern: naming.then(|| "flowlogic-{env}-{service}".to_string()),
            dev_auto_cleanup,
        },
    )
}

proptest! {
    #[test]
    fn compliant_flag_tracks_violations_and_category(
        record in arb_record(),
        rules in arb_rules(),
    ) {
        let c = classify(&record, &rules, test_now());
        let expected = c.violations.is_empty()
            && c.category != Category::Untagged
            && c.category != Category::Expired;
        prop_assert_eq!(c.compliant, expected);
    }

    #[test]
    fn terminal_categories_require_action(
        record in arb_record(),
        rules in arb_rules(),
    ) {
        let c = classify(&record, &rules, test_now());
        if matches!(c.category, Category::Untagged | Category::Expired) {
            prop_assert!(c.requires_action);
        }
        if c.env == Environment::Untagged {
            prop_assert_eq!(c.category, Category::Untagged);
        }
    }

    #[test]
    fn explicit_prod_tag_always_detects_prod(
        name in "[ -~]{0,40}",
    ) {
        let mut tags = BTreeMap::new();
        tags.insert("Env".to_string(), "prod".to_string());
        let record = ResourceRecord {
            arn: "arn:aws:s3:::x".to_string(),
            resource_type: "AWS::S3::Bucket".to_string(),
            name,
            tags,
        };
        let c = classify(&record, &EffectiveRules::default(), test_now());
        prop_assert_eq!(c.env, Environment::Prod);
    }

    #[test]
    fn classification_is_deterministic(
        record in arb_record(),
        rules in arb_rules(),
    ) {
        let now = test_now();
        prop_assert_eq!(classify(&record, &rules, now), classify(&record, &rules, now));
    }
}
