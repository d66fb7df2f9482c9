//! Maps the static group table onto the model IDs present in a payload.

use quota_widget_types::{GroupDefinition, GroupTable, QuotaPayload};

/// A group together with the members actually present in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup<'a> {
    pub definition: &'a GroupDefinition,
    /// Present members, in the group's declared order. Never empty.
    pub present: Vec<&'a str>,
}

/// Groups with at least one member in `payload`, in table order.
pub fn resolve_groups<'a>(table: &'a GroupTable, payload: &QuotaPayload) -> Vec<ResolvedGroup<'a>> {
    table
        .groups()
        .iter()
        .filter_map(|definition| {
            let present: Vec<&str> = definition
                .members
                .iter()
                .map(String::as_str)
                .filter(|id| payload.contains_key(*id))
                .collect();
            (!present.is_empty()).then_some(ResolvedGroup { definition, present })
        })
        .collect()
}

/// Payload IDs that belong to no group, in lexicographic order.
pub fn ungrouped_ids<'p>(table: &GroupTable, payload: &'p QuotaPayload) -> Vec<&'p str> {
    let grouped = table.all_grouped_ids();
    // BTreeMap keys are already sorted
    payload.keys().map(String::as_str).filter(|id| !grouped.contains(id)).collect()
}
