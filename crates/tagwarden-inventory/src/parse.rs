use serde::Deserialize;
use std::collections::BTreeMap;
use tagwarden_domain::model::ResourceRecord;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InventoryDocument {
    List(Vec<RawRecord>),
    Envelope { resources: Vec<RawRecord> },
}

/// One raw inventory record as exported by the cloud-side tooling. Every
/// field is optional; absent data becomes empty defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    #[serde(rename = "ResourceARN")]
    resource_arn: Option<String>,
    /// Lowercase fallback key some exporters emit instead of `ResourceARN`.
    arn: Option<String>,
    #[serde(rename = "ResourceType")]
    resource_type: Option<String>,
    #[serde(rename = "ResourceName")]
    resource_name: Option<String>,
    #[serde(rename = "Tags")]
    tags: Vec<RawTag>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTag {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Value")]
    value: String,
}

pub(crate) fn parse_inventory(text: &str) -> anyhow::Result<Vec<ResourceRecord>> {
    let doc: InventoryDocument = serde_json::from_str(text)?;
    let raw = match doc {
        InventoryDocument::List(records) => records,
        InventoryDocument::Envelope { resources } => resources,
    };
    Ok(raw.into_iter().map(to_record).collect())
}

fn to_record(raw: RawRecord) -> ResourceRecord {
    let arn = raw
        .resource_arn
        .filter(|s| !s.is_empty())
        .or(raw.arn)
        .unwrap_or_default();

    let mut name = raw.resource_name.unwrap_or_default();
    if name.is_empty() && !arn.is_empty() {
        // Fallback: the last colon-delimited ARN segment.
        name = arn.rsplit(':').next().unwrap_or_default().to_string();
    }

    // Later duplicates win, matching the exporters' own merge behavior.
    let tags: BTreeMap<String, String> = raw
        .tags
        .into_iter()
        .map(|t| (t.key, t.value))
        .collect();

    ResourceRecord {
        arn,
        resource_type: raw.resource_type.unwrap_or_default(),
        name,
        tags,
    }
}
