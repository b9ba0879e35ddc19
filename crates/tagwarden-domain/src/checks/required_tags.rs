use crate::checks::violate;
use crate::model::ResourceRecord;
use crate::rules::EffectiveRules;
use tagwarden_types::Classification;

pub(crate) fn run(record: &ResourceRecord, rules: &EffectiveRules, out: &mut Classification) {
    for rule in &rules.required_tags {
        if rule.required_for(out.env) && !record.tags.contains_key(&rule.name) {
            violate(out, format!("Missing required tag: {}", rule.name));
        }
    }
}
