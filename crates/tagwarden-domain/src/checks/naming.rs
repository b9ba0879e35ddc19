use crate::checks::violate;
use crate::model::ResourceRecord;
use crate::rules::EffectiveRules;
use tagwarden_types::{Classification, Environment};

pub(crate) fn run(record: &ResourceRecord, rules: &EffectiveRules, out: &mut Classification) {
    // No environment means no prefix to build; no pattern means the check is off.
    if out.env == Environment::Untagged || rules.naming_pattern.is_none() {
        return;
    }
    let prefix = rules.expected_name_prefix(out.env);
    if !record.name.starts_with(&prefix) {
        violate(out, format!("Naming violation: expected prefix \"{prefix}\""));
    }
}
