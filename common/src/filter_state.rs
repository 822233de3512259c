//! Filter controls and the filter state derived from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Snapshot of one toggle control at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub active: bool,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, active: bool) -> Self {
        Self { value: value.into(), active }
    }
}

/// Set of tag values currently wanted. Always rebuilt from a full snapshot
/// of the controls, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    active: BTreeSet<String>,
}

impl FilterState {
    pub fn compute<'a>(controls: impl IntoIterator<Item = &'a FilterOption>) -> Self {
        let active = controls
            .into_iter()
            .filter(|control| control.active)
            .map(|control| control.value.clone())
            .collect();
        Self { active }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.active.contains(value)
    }

    pub fn is_superset_of(&self, tags: &BTreeSet<String>) -> bool {
        tags.is_subset(&self.active)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FilterState {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { active: iter.into_iter().map(Into::into).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_checked_controls_are_active() {
        let controls = vec![FilterOption::new("cafe", true), FilterOption::new("wifi", false)];
        let state = FilterState::compute(&controls);
        assert!(state.contains("cafe"));
        assert!(!state.contains("wifi"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn no_controls_yield_an_empty_state() {
        let state = FilterState::compute(&Vec::<FilterOption>::new());
        assert!(state.is_empty());
    }

    #[test]
    fn duplicated_controls_collapse() {
        let controls = vec![FilterOption::new("cafe", true), FilterOption::new("cafe", false)];
        let state = FilterState::compute(&controls);
        assert_eq!(state.values().collect::<Vec<_>>(), vec!["cafe"]);
    }
}
