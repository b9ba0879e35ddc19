use crate::model::ResourceRecord;
use crate::rules::EffectiveRules;
use tagwarden_types::Classification;
use time::OffsetDateTime;

mod environment;
mod expiry;
mod lifecycle;
mod naming;
mod required_tags;


/// Run every check in pipeline order. All checks run; none short-circuits, so
/// a resource can accumulate multiple violations.
pub fn run_all(
    record: &ResourceRecord,
    rules: &EffectiveRules,
    now: OffsetDateTime,
    out: &mut Classification,
) {
    environment::run(record, rules, out);
    required_tags::run(record, rules, out);
    naming::run(record, rules, out);
    expiry::run(record, now, out);
    lifecycle::run(record, rules, out);
}

/// Record a violation. Any violation makes the resource non-compliant.
pub(crate) fn violate(out: &mut Classification, message: String) {
    out.violations.push(message);
    out.compliant = false;
}
