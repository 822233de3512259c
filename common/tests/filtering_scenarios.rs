use std::collections::{BTreeMap, BTreeSet};

use common::{
    FilterOption, FilterSession, ItemDisplay, ListView, MarkerId, MarkerLayer, ResultId, ResultRecord, ResultSet,
    SearchResponse,
};

/// List view that counts how many element writes actually changed something.
#[derive(Default)]
struct RecordingList {
    elements: BTreeMap<String, ItemDisplay>,
    changes: usize,
}

impl RecordingList {
    fn with_results(result_set: &ResultSet) -> Self {
        let elements = result_set.iter().map(|r| (r.id.list_element_id(), ItemDisplay::Shown)).collect();
        Self { elements, changes: 0 }
    }

    fn is_shown(&self, id: &str) -> bool {
        self.elements[&ResultId::new(id).list_element_id()] == ItemDisplay::Shown
    }
}

impl ListView for RecordingList {
    fn set_display(&mut self, element_id: &str, display: ItemDisplay) -> bool {
        let Some(current) = self.elements.get_mut(element_id) else {
            return false;
        };
        if *current != display {
            *current = display;
            self.changes += 1;
        }
        true
    }
}

#[derive(Default)]
struct RecordingLayer {
    present: BTreeSet<MarkerId>,
    adds: Vec<MarkerId>,
    removes: Vec<MarkerId>,
}

impl MarkerLayer for RecordingLayer {
    fn knows_marker(&self, _marker: MarkerId) -> bool {
        true
    }

    fn has_marker(&self, marker: MarkerId) -> bool {
        self.present.contains(&marker)
    }

    fn add_marker(&mut self, marker: MarkerId) {
        assert!(self.present.insert(marker), "duplicate marker {marker:?}");
        self.adds.push(marker);
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        assert!(self.present.remove(&marker), "marker {marker:?} was not on the layer");
        self.removes.push(marker);
    }
}

fn result_set(records: &[(&str, &[&str])]) -> ResultSet {
    ResultSet::new(records.iter().map(|(id, tags)| ResultRecord::new(*id, tags.iter().copied())).collect()).unwrap()
}

fn session(records: &[(&str, &[&str])]) -> FilterSession<RecordingList, RecordingLayer> {
    let set = result_set(records);
    let list = RecordingList::with_results(&set);
    FilterSession::new(set, list)
}

fn visibility(session: &FilterSession<RecordingList, RecordingLayer>, id: &str) -> bool {
    session.decisions().unwrap().is_visible(&ResultId::new(id)).unwrap()
}

#[test]
fn untagged_result_stays_visible_while_unchecked_tag_hides() {
    let mut session = session(&[("1", &[]), ("2", &["cafe"])]);
    let report = session.refilter(&[FilterOption::new("cafe", false)]);

    assert!(report.is_clean());
    assert!(visibility(&session, "1"));
    assert!(!visibility(&session, "2"));
    assert!(session.list().is_shown("1"));
    assert!(!session.list().is_shown("2"));
}

#[test]
fn checking_the_tag_shows_the_result_again() {
    let mut session = session(&[("1", &[]), ("2", &["cafe"])]);
    session.refilter(&[FilterOption::new("cafe", false)]);
    session.refilter(&[FilterOption::new("cafe", true)]);

    assert!(visibility(&session, "1"));
    assert!(visibility(&session, "2"));
    assert!(session.list().is_shown("2"));
}

#[test]
fn every_tag_of_a_result_must_be_checked() {
    let mut session = session(&[("1", &["cafe", "wifi"])]);
    session.refilter(&[FilterOption::new("cafe", true), FilterOption::new("wifi", false)]);
    assert!(!visibility(&session, "1"));

    session.refilter(&[FilterOption::new("cafe", true), FilterOption::new("wifi", true)]);
    assert!(visibility(&session, "1"));

    session.refilter(&[FilterOption::new("cafe", false), FilterOption::new("wifi", true)]);
    assert!(!visibility(&session, "1"));
}

#[test]
fn no_controls_hide_tagged_results_only() {
    let mut session = session(&[("1", &[]), ("2", &["cafe"]), ("3", &["bar", "wifi"])]);
    let report = session.refilter(&Vec::<FilterOption>::new());

    assert_eq!(report.shown, 1);
    assert_eq!(report.hidden, 2);
    assert!(session.list().is_shown("1"));
}

#[test]
fn empty_result_set_filters_cleanly() {
    let mut session = session(&[]);
    let report = session.refilter(&[FilterOption::new("cafe", true)]);
    assert!(report.is_clean());
    assert_eq!(report.shown + report.hidden, 0);
}

#[test]
fn repeating_a_pass_changes_nothing() {
    let mut session = session(&[("1", &["cafe"]), ("2", &["bar"]), ("3", &[])]);
    let markers = [("1", 1), ("2", 2), ("3", 3)].map(|(id, m)| (ResultId::new(id), MarkerId(m)));
    let layer = RecordingLayer { present: [1, 2, 3].map(MarkerId).into_iter().collect(), ..Default::default() };
    session.load_map(markers, layer).unwrap();

    let controls = [FilterOption::new("cafe", true), FilterOption::new("bar", false)];
    let first = session.refilter(&controls);
    let changes = session.list().changes;
    let removes = session.marker_layer().unwrap().removes.len();

    let second = session.refilter(&controls);
    assert_eq!(first, second);
    assert_eq!(session.list().changes, changes);
    assert_eq!(session.marker_layer().unwrap().removes.len(), removes);
    assert!(session.marker_layer().unwrap().adds.is_empty());
}

#[test]
fn list_only_session_runs_without_a_map() {
    let mut session = session(&[("2", &["cafe"])]);
    session.refilter(&[FilterOption::new("cafe", false)]);
    assert!(!session.is_map_loaded());
    assert!(session.marker_layer().is_none());
    assert_eq!(session.locate_marker(&ResultId::new("2")), None);
}

#[test]
fn marker_is_removed_then_re_added_exactly_once() {
    let mut session = session(&[("1", &[]), ("2", &["cafe"])]);
    let layer = RecordingLayer { present: [MarkerId(1), MarkerId(2)].into_iter().collect(), ..Default::default() };
    session.load_map([(ResultId::new("1"), MarkerId(1)), (ResultId::new("2"), MarkerId(2))], layer).unwrap();

    session.refilter(&[FilterOption::new("cafe", false)]);
    assert!(!session.marker_layer().unwrap().has_marker(MarkerId(2)));
    assert_eq!(session.marker_layer().unwrap().removes, vec![MarkerId(2)]);

    session.refilter(&[FilterOption::new("cafe", true)]);
    session.refilter(&[FilterOption::new("cafe", true)]);
    let layer = session.marker_layer().unwrap();
    assert!(layer.has_marker(MarkerId(2)));
    assert_eq!(layer.adds, vec![MarkerId(2)]);
    assert_eq!(session.locate_marker(&ResultId::new("2")), Some(MarkerId(2)));
}

#[test]
fn loading_the_map_applies_the_current_filters() {
    let mut session = session(&[("1", &["cafe"]), ("2", &["bar"])]);
    session.refilter(&[FilterOption::new("cafe", true), FilterOption::new("bar", false)]);

    let layer = RecordingLayer { present: [MarkerId(1), MarkerId(2)].into_iter().collect(), ..Default::default() };
    let report = session.load_map([(ResultId::new("1"), MarkerId(1)), (ResultId::new("2"), MarkerId(2))], layer).unwrap();

    assert!(report.is_clean());
    assert!(session.is_map_loaded());
    assert_eq!(session.marker_layer().unwrap().removes, vec![MarkerId(2)]);
}

#[test]
fn the_map_loads_only_once() {
    let mut session = session(&[("1", &["cafe"])]);
    session.load_map([(ResultId::new("1"), MarkerId(1))], RecordingLayer::default()).unwrap();
    let second = session.load_map([(ResultId::new("1"), MarkerId(9))], RecordingLayer::default());
    assert!(second.is_err());
    assert_eq!(session.locate_marker(&ResultId::new("1")), Some(MarkerId(1)));
}

#[test]
fn desynchronized_list_does_not_stop_the_pass() {
    let set = result_set(&[("1", &["cafe"]), ("2", &["cafe"]), ("3", &["cafe"])]);
    let mut list = RecordingList::with_results(&set);
    list.elements.remove(&ResultId::new("2").list_element_id());
    let mut session: FilterSession<_, RecordingLayer> = FilterSession::new(set, list);

    let report = session.refilter(&[FilterOption::new("cafe", false)]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.hidden, 2);
    assert!(!session.list().is_shown("1"));
    assert!(!session.list().is_shown("3"));
}

#[test]
fn response_to_filtered_views() {
    let response: SearchResponse = serde_json::from_str(
        r#"{
            "status": "ok",
            "content": [
                {"id": "n1", "tags": "", "html": "Fontaine"},
                {"id": "n2", "tags": "cafe", "html": "Le Zinc"},
                {"id": "n3", "tags": "cafe;wifi", "html": "Le Comptoir"}
            ],
            "map_results": [["n1", [48.1, 2.1], ""], ["n2", [48.2, 2.2], ""], ["n3", [48.3, 2.3], ""]]
        }"#,
    )
    .unwrap();
    let outcome = response.into_outcome().unwrap();
    let controls = common::initial_controls(&outcome.filters);
    let list = RecordingList::with_results(&outcome.result_set);
    let mut session: FilterSession<_, RecordingLayer> = FilterSession::new(outcome.result_set, list);

    let report = session.refilter(&controls);
    assert_eq!(report.shown, 3);

    let controls: Vec<_> =
        controls.into_iter().map(|c| FilterOption::new(c.value.clone(), c.value != "wifi")).collect();
    session.refilter(&controls);
    assert!(session.list().is_shown("n1"));
    assert!(session.list().is_shown("n2"));
    assert!(!session.list().is_shown("n3"));
}

#[test]
fn tag_missing_from_server_filters_can_always_be_shown_again() {
    let response: SearchResponse = serde_json::from_str(
        r#"{
            "status": "ok",
            "content": [
                {"id": "1", "tags": "cafe;wifi", "html": "Le Comptoir"},
                {"id": "2", "tags": "bar", "html": "Chez Paul"}
            ],
            "filters": [{"value": "cafe", "count": 1}, {"value": "bar", "count": 1}]
        }"#,
    )
    .unwrap();
    let outcome = response.into_outcome().unwrap();
    let mut controls = common::initial_controls(&outcome.filters);
    let list = RecordingList::with_results(&outcome.result_set);
    let mut session: FilterSession<_, RecordingLayer> = FilterSession::new(outcome.result_set, list);

    let first = session.refilter(&controls);
    assert_eq!(first.shown, 2);
    assert!(session.list().is_shown("1"));

    for control in controls.iter_mut().filter(|c| c.value == "bar") {
        control.active = false;
    }
    session.refilter(&controls);
    assert!(!session.list().is_shown("2"));

    for control in controls.iter_mut() {
        control.active = true;
    }
    session.refilter(&controls);
    assert!(visibility(&session, "1"));
    assert!(session.list().is_shown("1"));
    assert!(session.list().is_shown("2"));
}

#[test]
fn result_without_coordinates_is_counted_in_map_mode() {
    let mut session = session(&[("1", &["cafe"]), ("2", &["cafe"])]);
    let layer = RecordingLayer { present: [MarkerId(1)].into_iter().collect(), ..Default::default() };
    session.load_map([(ResultId::new("1"), MarkerId(1))], layer).unwrap();

    let report = session.refilter(&[FilterOption::new("cafe", false)]);
    assert!(report.is_clean());
    assert_eq!(report.hidden, 2);
    assert!(!session.list().is_shown("2"));
    assert_eq!(session.marker_layer().unwrap().removes, vec![MarkerId(1)]);
    assert_eq!(session.locate_marker(&ResultId::new("2")), None);
}
