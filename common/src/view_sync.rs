//! Applies visibility decisions to the result list and the marker layer.

use crate::error::SyncIssue;
use crate::result_set::{MarkerId, ResultSet};
use crate::visibility::VisibilityDecisions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDisplay {
    Shown,
    Hidden,
}

impl ItemDisplay {
    pub fn from_visible(visible: bool) -> Self {
        if visible { ItemDisplay::Shown } else { ItemDisplay::Hidden }
    }

    /// CSS `display` value of a list element.
    pub fn css(&self) -> &'static str {
        match self {
            ItemDisplay::Shown => "block",
            ItemDisplay::Hidden => "none",
        }
    }
}

/// The list of rendered results, addressed by element id.
pub trait ListView {
    /// Returns `false` when no element has this id.
    fn set_display(&mut self, element_id: &str, display: ItemDisplay) -> bool;
}

/// The map layer holding the markers currently shown.
pub trait MarkerLayer {
    /// The marker was created for this map, shown or not.
    fn knows_marker(&self, marker: MarkerId) -> bool;
    fn has_marker(&self, marker: MarkerId) -> bool;
    fn add_marker(&mut self, marker: MarkerId);
    fn remove_marker(&mut self, marker: MarkerId);
}

/// The views a filtering pass writes to. The map is only there once it has
/// been loaded for the current result set.
#[derive(Debug)]
pub enum ViewContext<'a, L, M> {
    ListOnly(&'a mut L),
    ListAndMap(&'a mut L, &'a mut M),
}

impl<L, M> ViewContext<'_, L, M> {
    pub fn is_map_loaded(&self) -> bool {
        matches!(self, ViewContext::ListAndMap(..))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub shown: usize,
    pub hidden: usize,
    pub skipped: Vec<SyncIssue>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, issue: SyncIssue) {
        tracing::warn!("skipping result during filtering: {issue}");
        self.skipped.push(issue);
    }
}

/// Writes every decision to the views. A record whose list element cannot
/// be found is skipped and reported; a marker the map does not know is
/// reported after the list is updated. The rest of the pass still runs.
/// Records that were given no marker are not on the map and only touch the
/// list.
pub fn apply<L: ListView, M: MarkerLayer>(
    result_set: &ResultSet,
    decisions: &VisibilityDecisions,
    mut views: ViewContext<'_, L, M>,
) -> SyncReport {
    let mut report = SyncReport::default();
    for (id, visible) in decisions.iter() {
        let Some(record) = result_set.get(id) else {
            report.skip(SyncIssue::UnknownRecord(id.clone()));
            continue;
        };

        let (list, markers) = match &mut views {
            ViewContext::ListOnly(list) => (&mut **list, None),
            ViewContext::ListAndMap(list, markers) => (&mut **list, Some(&mut **markers)),
        };

        let element_id = id.list_element_id();
        if !list.set_display(&element_id, ItemDisplay::from_visible(visible)) {
            report.skip(SyncIssue::MissingListElement { id: id.clone(), element_id });
            continue;
        }

        if visible {
            report.shown += 1;
        } else {
            report.hidden += 1;
        }

        if let (Some(layer), Some(marker)) = (markers, record.marker()) {
            if layer.knows_marker(marker) {
                sync_marker(layer, marker, visible);
            } else {
                report.skip(SyncIssue::MissingMarker(id.clone()));
            }
        }
    }
    report
}

fn sync_marker<M: MarkerLayer>(layer: &mut M, marker: MarkerId, visible: bool) {
    match (visible, layer.has_marker(marker)) {
        (true, false) => layer.add_marker(marker),
        (false, true) => layer.remove_marker(marker),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::result_set::{ResultId, ResultRecord};

    struct FakeList {
        elements: BTreeMap<String, ItemDisplay>,
    }

    impl ListView for FakeList {
        fn set_display(&mut self, element_id: &str, display: ItemDisplay) -> bool {
            match self.elements.get_mut(element_id) {
                Some(current) => {
                    *current = display;
                    true
                }
                None => false,
            }
        }
    }

    /// Panics on any marker operation.
    struct NoMap;

    impl MarkerLayer for NoMap {
        fn knows_marker(&self, _marker: MarkerId) -> bool {
            panic!("no map loaded")
        }
        fn has_marker(&self, _marker: MarkerId) -> bool {
            panic!("no map loaded")
        }
        fn add_marker(&mut self, _marker: MarkerId) {
            panic!("no map loaded")
        }
        fn remove_marker(&mut self, _marker: MarkerId) {
            panic!("no map loaded")
        }
    }

    #[derive(Default)]
    struct FakeLayer {
        present: BTreeSet<MarkerId>,
        unknown: BTreeSet<MarkerId>,
    }

    impl MarkerLayer for FakeLayer {
        fn knows_marker(&self, marker: MarkerId) -> bool {
            !self.unknown.contains(&marker)
        }
        fn has_marker(&self, marker: MarkerId) -> bool {
            self.present.contains(&marker)
        }
        fn add_marker(&mut self, marker: MarkerId) {
            assert!(self.present.insert(marker), "marker added twice");
        }
        fn remove_marker(&mut self, marker: MarkerId) {
            assert!(self.present.remove(&marker), "absent marker removed");
        }
    }

    fn list_for(ids: &[&str]) -> FakeList {
        FakeList {
            elements: ids.iter().map(|id| (ResultId::new(*id).list_element_id(), ItemDisplay::Shown)).collect(),
        }
    }

    fn decisions(pairs: &[(&str, bool)]) -> VisibilityDecisions {
        pairs.iter().map(|(id, v)| (ResultId::new(*id), *v)).collect()
    }

    #[test]
    fn list_only_mode_never_touches_markers() {
        let results = ResultSet::new(vec![ResultRecord::new("1", ["cafe"])]).unwrap();
        let mut list = list_for(&["1"]);
        let report = apply(&results, &decisions(&[("1", false)]), ViewContext::<_, NoMap>::ListOnly(&mut list));
        assert!(report.is_clean());
        assert_eq!(report.hidden, 1);
        assert_eq!(list.elements["result-1"], ItemDisplay::Hidden);
    }

    #[test]
    fn missing_list_element_is_skipped_not_fatal() {
        let results =
            ResultSet::new(vec![ResultRecord::new("1", ["cafe"]), ResultRecord::new("2", ["cafe"])]).unwrap();
        let mut list = list_for(&["2"]);
        let report =
            apply(&results, &decisions(&[("1", false), ("2", false)]), ViewContext::<_, NoMap>::ListOnly(&mut list));
        assert_eq!(report.hidden, 1);
        assert_eq!(
            report.skipped,
            vec![SyncIssue::MissingListElement { id: ResultId::new("1"), element_id: "result-1".to_string() }]
        );
        assert_eq!(list.elements["result-2"], ItemDisplay::Hidden);
    }

    #[test]
    fn unknown_decision_is_reported() {
        let results = ResultSet::new(vec![ResultRecord::new("1", ["cafe"])]).unwrap();
        let mut list = list_for(&["1"]);
        let report =
            apply(&results, &decisions(&[("1", true), ("7", true)]), ViewContext::<_, NoMap>::ListOnly(&mut list));
        assert_eq!(report.shown, 1);
        assert_eq!(report.skipped, vec![SyncIssue::UnknownRecord(ResultId::new("7"))]);
    }

    #[test]
    fn markers_are_removed_and_re_added_once() {
        let mut results = ResultSet::new(vec![ResultRecord::new("2", ["cafe"])]).unwrap();
        results.attach_markers([(ResultId::new("2"), MarkerId(2))]).unwrap();
        let mut list = list_for(&["2"]);
        let mut layer = FakeLayer { present: [MarkerId(2)].into_iter().collect(), ..Default::default() };

        for visible in [false, false] {
            apply(&results, &decisions(&[("2", visible)]), ViewContext::ListAndMap(&mut list, &mut layer));
        }
        assert!(!layer.has_marker(MarkerId(2)));

        for visible in [true, true] {
            apply(&results, &decisions(&[("2", visible)]), ViewContext::ListAndMap(&mut list, &mut layer));
        }
        assert!(layer.has_marker(MarkerId(2)));
    }

    #[test]
    fn result_off_the_map_only_touches_the_list() {
        let mut results =
            ResultSet::new(vec![ResultRecord::new("1", ["cafe"]), ResultRecord::new("2", ["cafe"])]).unwrap();
        results.attach_markers([(ResultId::new("2"), MarkerId(2))]).unwrap();
        let mut list = list_for(&["1", "2"]);
        let mut layer = FakeLayer::default();
        let views = ViewContext::ListAndMap(&mut list, &mut layer);
        assert!(views.is_map_loaded());
        let report = apply(&results, &decisions(&[("1", false), ("2", true)]), views);
        assert!(report.is_clean());
        assert_eq!((report.shown, report.hidden), (1, 1));
        assert_eq!(list.elements["result-1"], ItemDisplay::Hidden);
        assert!(layer.has_marker(MarkerId(2)));
    }

    #[test]
    fn marker_unknown_to_the_map_is_reported_after_the_list_update() {
        let mut results =
            ResultSet::new(vec![ResultRecord::new("1", ["cafe"]), ResultRecord::new("2", ["cafe"])]).unwrap();
        results.attach_markers([(ResultId::new("1"), MarkerId(1)), (ResultId::new("2"), MarkerId(2))]).unwrap();
        let mut list = list_for(&["1", "2"]);
        let mut layer = FakeLayer { unknown: [MarkerId(1)].into_iter().collect(), ..Default::default() };
        let report =
            apply(&results, &decisions(&[("1", true), ("2", true)]), ViewContext::ListAndMap(&mut list, &mut layer));
        assert_eq!(report.skipped, vec![SyncIssue::MissingMarker(ResultId::new("1"))]);
        assert_eq!(report.shown, 2);
        assert_eq!(list.elements["result-1"], ItemDisplay::Shown);
        assert!(!layer.has_marker(MarkerId(1)));
        assert!(layer.has_marker(MarkerId(2)));
    }

    #[test]
    fn display_maps_to_css() {
        assert_eq!(ItemDisplay::from_visible(true).css(), "block");
        assert_eq!(ItemDisplay::from_visible(false).css(), "none");
    }
}
