//! Tag filter catalog: one checkbox per distinct tag of a result set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_state::FilterOption;
use crate::result_set::ResultSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilterItem {
    pub value: String,
    pub count: u64,
}

/// Most frequent tags first, ties broken by value.
pub fn build_tag_filter(result_set: &ResultSet) -> Vec<TagFilterItem> {
    build_tag_filter_with_counts(result_set, &[])
}

/// One control per tag carried by the result set, so no record can end up
/// behind a tag nobody can check. Counts reported by the server replace the
/// local ones; reported tags no record carries are left out.
pub fn build_tag_filter_with_counts(result_set: &ResultSet, reported: &[TagFilterItem]) -> Vec<TagFilterItem> {
    let reported: BTreeMap<&str, u64> = reported.iter().map(|item| (item.value.as_str(), item.count)).collect();
    let mut items = result_set
        .tag_counts()
        .into_iter()
        .map(|(value, count)| {
            let count = reported.get(value.as_str()).copied().unwrap_or(count as u64);
            TagFilterItem { value, count }
        })
        .collect::<Vec<_>>();
    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    items
}

/// Every control starts checked so a fresh result set is fully visible.
pub fn initial_controls(items: &[TagFilterItem]) -> Vec<FilterOption> {
    items.iter().map(|item| FilterOption::new(item.value.clone(), true)).collect()
}
