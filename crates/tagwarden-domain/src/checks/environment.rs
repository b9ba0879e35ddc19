use crate::checks::violate;
use crate::model::ResourceRecord;
use crate::rules::EffectiveRules;
use tagwarden_types::{Classification, Environment};

/// Environment variants accepted in the `Env` tag and in name markers, in
/// detection priority order: prod first, dev last.
const MARKERS: [(Environment, [&str; 2]); 3] = [
    (Environment::Prod, ["prod", "production"]),
    (Environment::Staging, ["staging", "stage"]),
    (Environment::Dev, ["dev", "development"]),
];

pub(crate) fn run(record: &ResourceRecord, rules: &EffectiveRules, out: &mut Classification) {
    if let Some(env) = from_tag(record) {
        out.env = env;
        return;
    }
    if let Some(env) = from_name(record, rules) {
        out.env = env;
        return;
    }
    out.env = Environment::Untagged;
    violate(out, "Missing Env tag and cannot infer from naming".to_string());
}

fn from_tag(record: &ResourceRecord) -> Option<Environment> {
    let value = record.tags.get("Env")?.to_lowercase();
    MARKERS
        .iter()
        .find(|(_, variants)| variants.contains(&value.as_str()))
        .map(|(env, _)| *env)
}

fn from_name(record: &ResourceRecord, rules: &EffectiveRules) -> Option<Environment> {
    // Markers are anchored on the product head; without one, a bare
    // `dev-` substring says nothing about the environment.
    if rules.product_prefix.is_empty() {
        return None;
    }
    for (env, variants) in MARKERS {
        for variant in variants {
            let marker = format!("{}{}-", rules.product_prefix, variant);
            if record.name.contains(&marker) {
                return Some(env);
            }
        }
    }
    None
}
