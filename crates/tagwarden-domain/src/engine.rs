use crate::checks;
use crate::model::ResourceRecord;
use crate::report::DomainReport;
use crate::rules::EffectiveRules;
use tagwarden_types::{Category, Classification, Environment};
use time::OffsetDateTime;

/// Classify one resource. `now` is supplied by the caller so expiry decisions
/// stay deterministic under test.
pub fn classify(
    record: &ResourceRecord,
    rules: &EffectiveRules,
    now: OffsetDateTime,
) -> Classification {
    let mut out = Classification {
        arn: record.arn.clone(),
        resource_type: record.resource_type.clone(),
        name: record.name.clone(),
        env: Environment::Untagged,
        category: Category::Compliant,
        violations: Vec::new(),
        compliant: true,
        expires_at: None,
        requires_action: false,
    };

    checks::run_all(record, rules, now, &mut out);
    resolve_category(&mut out);

    out
}

/// Classify every record in input order and fold the results into one report.
pub fn evaluate(
    records: &[ResourceRecord],
    rules: &EffectiveRules,
    now: OffsetDateTime,
) -> DomainReport {
    let mut report = DomainReport::new(records.len() as u32);
    for record in records {
        report.push(classify(record, rules, now));
    }
    report
}

/// Final categorization, after all checks have run.
///
/// An untagged environment wins unconditionally, even over a category the
/// expiry check already set. That precedence is deliberate; see DESIGN.md.
fn resolve_category(out: &mut Classification) {
    if out.env == Environment::Untagged {
        out.category = Category::Untagged;
        out.requires_action = true;
    } else if !out.compliant && out.category == Category::Compliant {
        out.category = Category::NonCompliant;
        out.requires_action = true;
    }
}
