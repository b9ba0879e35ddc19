//! Shared test utilities for the tagwarden workspace.

use serde_json::Value;

/// Normalize non-deterministic report fields for golden-file comparison.
///
/// `tool.version` is replaced only when the root object looks like a report
/// envelope (has `schema`, `tool`, `timestamp`, `summary`), so a nested
/// object that happens to carry the same keys is left alone; `timestamp` is
/// normalized at the root for the same reason.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("timestamp")
            && obj.contains_key("summary");
        if is_envelope {
            obj.insert(
                "timestamp".to_string(),
                Value::String("__TIMESTAMP__".to_string()),
            );
            if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut) {
                if tool.contains_key("version") {
                    tool.insert(
                        "version".to_string(),
                        Value::String("__VERSION__".to_string()),
                    );
                }
            }
        }
    }
    value
}

/// A small but representative policy spec document for end-to-end tests.
pub fn sample_spec() -> &'static str {
    r#"
x-aws-inventory-rules:
  required_tags:
    - name: Env
      required: true
    - name: Owner
      required: true
    - name: ExpiresAt
      required: true
      required_when:
        env: [dev]
  naming_convention:
    pattern: "flowlogic-{env}-{service}"
  lifecycle_policies:
    dev_resources:
      auto_cleanup: true
"#
}

/// An inventory document matching [`sample_spec`]: one compliant prod
/// resource, one expired dev resource, one untagged resource.
pub fn sample_inventory() -> &'static str {
    r#"{
  "resources": [
    {
      "ResourceARN": "arn:aws:s3:::flowlogic-prod-assets",
      "ResourceType": "AWS::S3::Bucket",
      "ResourceName": "flowlogic-prod-assets",
      "Tags": [
        {"Key": "Env", "Value": "prod"},
        {"Key": "Owner", "Value": "platform"}
      ]
    },
    {
      "ResourceARN": "arn:aws:ec2:us-east-1:123456789012:instance/i-abc",
      "ResourceType": "AWS::EC2::Instance",
      "ResourceName": "flowlogic-dev-scratch",
      "Tags": [
        {"Key": "Env", "Value": "dev"},
        {"Key": "Owner", "Value": "platform"},
        {"Key": "ExpiresAt", "Value": "2020-01-01T00:00:00Z"}
      ]
    },
    {
      "ResourceARN": "arn:aws:s3:::random-name",
      "ResourceType": "AWS::S3::Bucket",
      "Tags": []
    }
  ]
}
"#
}
