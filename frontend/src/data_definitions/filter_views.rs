//! Reactive views the filtering session writes to.

use std::collections::BTreeMap;

use common::{Coordinates, FilterOption, FilterSession, ItemDisplay, ListView, MapResultEntry, ResultId, ResultSet};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::map::leaflet::{LeafletMarkerLayer, MAP_ELEMENT_ID};

pub type ResultsSession = FilterSession<SignalListView, LeafletMarkerLayer>;

/// Display state of every result list element, keyed by DOM id. The list
/// renders one element per record, so every record is addressable from the
/// first filtering pass on.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalListView {
    displays: Signal<BTreeMap<String, ItemDisplay>>,
}

impl SignalListView {
    pub fn new(displays: Signal<BTreeMap<String, ItemDisplay>>) -> Self {
        Self { displays }
    }

    pub fn initial_displays(result_set: &ResultSet) -> BTreeMap<String, ItemDisplay> {
        result_set.iter().map(|record| (record.id.list_element_id(), ItemDisplay::Shown)).collect()
    }

    pub fn display_of(&self, element_id: &str) -> ItemDisplay {
        self.displays.read().get(element_id).copied().unwrap_or(ItemDisplay::Shown)
    }
}

impl ListView for SignalListView {
    fn set_display(&mut self, element_id: &str, display: ItemDisplay) -> bool {
        match self.displays.peek().get(element_id) {
            None => return false,
            Some(current) if *current == display => return true,
            Some(_) => {}
        }
        self.displays.write().insert(element_id.to_string(), display);
        true
    }
}

/// Shared by the filter panel, the list and the map of one result set.
#[derive(Clone, Copy)]
pub struct ResultsFilterContext {
    pub session: Signal<ResultsSession>,
    pub controls: Signal<Vec<FilterOption>>,
    pub list_view: SignalListView,
}

impl ResultsFilterContext {
    /// Handles a toggle event, then refilters from a full snapshot of the
    /// controls.
    pub fn set_control(mut self, value: &str, checked: bool) {
        tracing::info!("Filter {value} used: {checked}");
        for control in self.controls.write().iter_mut().filter(|c| c.value == value) {
            control.active = checked;
        }
        let controls = self.controls.peek().clone();
        let report = self.session.write().refilter(&controls);
        if !report.is_clean() {
            tracing::warn!("{} results could not be synchronized", report.skipped.len());
        }
    }

    pub fn is_map_loaded(&self) -> bool {
        self.session.read().is_map_loaded()
    }

    /// Creates the Leaflet map in its (mounted) container and hands its
    /// markers to the session. Entries are checked against the result set
    /// before Leaflet touches the container.
    pub fn load_map(mut self, entries: &[MapResultEntry], user_position: Coordinates) -> anyhow::Result<()> {
        {
            let session = self.session.peek();
            if session.is_map_loaded() {
                return Ok(());
            }
            session.result_set().check_map_entries(entries.iter().map(|MapResultEntry(id, ..)| id))?;
        }
        let (layer, markers) = LeafletMarkerLayer::create(MAP_ELEMENT_ID, entries, user_position)?;
        let report = self.session.write().load_map(markers, layer)?;
        tracing::info!("Map loaded: {} shown, {} hidden", report.shown, report.hidden);
        Ok(())
    }

    /// Opens the popup of a result's marker and scrolls the map into view.
    pub fn focus_on_map(&self, id: &ResultId) {
        let session = self.session.read();
        let (Some(marker), Some(layer)) = (session.locate_marker(id), session.marker_layer()) else {
            tracing::warn!("No marker on the map for result {id}");
            return;
        };
        layer.open_popup(marker);
        let map_element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MAP_ELEMENT_ID));
        if let Some(map_element) = map_element {
            map_element.scroll_into_view();
        }
    }
}
