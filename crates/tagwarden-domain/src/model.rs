use std::collections::BTreeMap;

/// One inventory record, already normalized by the inventory adapter.
///
/// Missing optional inputs arrive as empty strings / empty maps; the name has
/// already been derived from the ARN when the record carried none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceRecord {
    pub arn: String,
    pub resource_type: String,
    pub name: String,
    pub tags: BTreeMap<String, String>,
}
