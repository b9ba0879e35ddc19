use tagwarden_types::Report;

pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("# Tagwarden report\n\n");
    out.push_str(&format!(
        "- Resources: {}\n- Compliant: {} / Non-compliant: {}\n- Expired: {} / Untagged: {}\n",
        report.total_resources,
        report.summary.compliant,
        report.summary.non_compliant,
        report.summary.expired,
        report.summary.untagged
    ));
    out.push_str(&format!(
        "- By environment: prod {} / staging {} / dev {} / untagged {}\n\n",
        report.summary.by_env.prod,
        report.summary.by_env.staging,
        report.summary.by_env.dev,
        report.summary.by_env.untagged
    ));

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");

    for entry in &report.violations {
        out.push_str(&format!(
            "- `{}` ({}, `{}`)\n",
            entry.name,
            entry.env.as_str(),
            entry.arn
        ));
        for violation in &entry.violations {
            out.push_str(&format!("  - {}\n", violation));
        }
    }

    out
}
