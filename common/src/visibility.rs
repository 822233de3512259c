//! Per-record visibility decisions.
//!
//! A record is visible iff every one of its tags is active. Untagged records
//! are therefore visible under any filter state, including the empty one.

use std::collections::BTreeMap;

use crate::filter_state::FilterState;
use crate::result_set::{ResultId, ResultRecord, ResultSet};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityDecisions {
    decisions: BTreeMap<ResultId, bool>,
}

impl VisibilityDecisions {
    pub fn is_visible(&self, id: &ResultId) -> Option<bool> {
        self.decisions.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResultId, bool)> {
        self.decisions.iter().map(|(id, visible)| (id, *visible))
    }

    pub fn visible_count(&self) -> usize {
        self.decisions.values().filter(|v| **v).count()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl FromIterator<(ResultId, bool)> for VisibilityDecisions {
    fn from_iter<T: IntoIterator<Item = (ResultId, bool)>>(iter: T) -> Self {
        Self { decisions: iter.into_iter().collect() }
    }
}

pub fn is_record_visible(record: &ResultRecord, filter_state: &FilterState) -> bool {
    filter_state.is_superset_of(&record.tags)
}

pub fn decide(result_set: &ResultSet, filter_state: &FilterState) -> VisibilityDecisions {
    result_set
        .iter()
        .map(|record| (record.id.clone(), is_record_visible(record, filter_state)))
        .collect()
}
