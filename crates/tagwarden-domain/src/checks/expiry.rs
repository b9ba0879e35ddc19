use crate::checks::violate;
use crate::model::ResourceRecord;
use tagwarden_types::{Category, Classification, Environment};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub(crate) fn run(record: &ResourceRecord, now: OffsetDateTime, out: &mut Classification) {
    let Some(raw) = record.tags.get("ExpiresAt") else {
        return;
    };

    // A trailing `Z` is UTC shorthand; normalize before parsing.
    let normalized = match raw.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => raw.clone(),
    };

    let Ok(expires_at) = OffsetDateTime::parse(&normalized, &Rfc3339) else {
        // Fails soft: a malformed timestamp is a violation, never an expiry.
        violate(out, format!("Invalid ExpiresAt format: {raw}"));
        return;
    };

    out.expires_at = Some(expires_at);

    // Only dev resources are auto-expired; other environments keep the
    // timestamp without further consequence.
    if out.env == Environment::Dev && expires_at < now {
        out.category = Category::Expired;
        out.requires_action = true;
        violate(out, format!("Expired dev resource: ExpiresAt={raw}"));
    }
}
