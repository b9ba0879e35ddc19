use crate::checks::violate;
use crate::model::ResourceRecord;
use crate::rules::EffectiveRules;
use tagwarden_types::{Classification, Environment};

pub(crate) fn run(record: &ResourceRecord, rules: &EffectiveRules, out: &mut Classification) {
    if rules.dev_auto_cleanup
        && out.env == Environment::Dev
        && !record.tags.contains_key("ExpiresAt")
    {
        violate(
            out,
            "Dev resource missing required ExpiresAt tag (auto-cleanup enabled)".to_string(),
        );
    }
}
