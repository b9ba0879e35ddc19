use std::collections::BTreeMap;
use tagwarden_types::{Category, Classification, Summary, ViolationEntry};

/// Aggregate of one classification pass, before the app layer wraps it in the
/// report envelope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DomainReport {
    pub total_resources: u32,
    pub classifications: BTreeMap<Category, Vec<Classification>>,
    pub summary: Summary,
    pub violations: Vec<ViolationEntry>,
}

impl DomainReport {
    pub fn new(total_resources: u32) -> Self {
        DomainReport {
            total_resources,
            ..DomainReport::default()
        }
    }

    /// Fold one classification into the report. Call in input order; grouping
    /// and the violations list preserve it.
    pub fn push(&mut self, classification: Classification) {
        if classification.compliant {
            self.summary.compliant += 1;
        } else {
            self.summary.non_compliant += 1;
        }

        // Independent of the compliant/non_compliant partition.
        match classification.category {
            Category::Expired => self.summary.expired += 1,
            Category::Untagged => self.summary.untagged += 1,
            _ => {}
        }

        self.summary.by_env.bump(classification.env);

        if !classification.violations.is_empty() {
            self.violations.push(ViolationEntry {
                arn: classification.arn.clone(),
                name: classification.name.clone(),
                env: classification.env,
                violations: classification.violations.clone(),
            });
        }

        self.classifications
            .entry(classification.category)
            .or_default()
            .push(classification);
    }
}
