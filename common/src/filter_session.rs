//! One filtering session: a result set, its views, and the last decisions
//! applied to them.

use crate::error::ResultSetError;
use crate::filter_state::{FilterOption, FilterState};
use crate::result_set::{MarkerId, ResultId, ResultSet};
use crate::view_sync::{apply, ListView, MarkerLayer, SyncReport, ViewContext};
use crate::visibility::{decide, VisibilityDecisions};

/// Owns the views of the current search. The marker layer appears once,
/// when the map is loaded, and stays until the session is dropped with its
/// result set.
#[derive(Debug)]
pub struct FilterSession<L, M> {
    result_set: ResultSet,
    list: L,
    marker_layer: Option<M>,
    decisions: Option<VisibilityDecisions>,
}

impl<L: ListView, M: MarkerLayer> FilterSession<L, M> {
    pub fn new(result_set: ResultSet, list: L) -> Self {
        Self { result_set, list, marker_layer: None, decisions: None }
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.result_set
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn marker_layer(&self) -> Option<&M> {
        self.marker_layer.as_ref()
    }

    pub fn is_map_loaded(&self) -> bool {
        self.marker_layer.is_some()
    }

    /// Last decisions applied, if any pass ran yet.
    pub fn decisions(&self) -> Option<&VisibilityDecisions> {
        self.decisions.as_ref()
    }

    /// Recomputes everything from a full snapshot of the filter controls.
    /// The filter state is complete before any decision is taken.
    pub fn refilter<'a>(&mut self, controls: impl IntoIterator<Item = &'a FilterOption>) -> SyncReport {
        let filter_state = FilterState::compute(controls);
        let decisions = decide(&self.result_set, &filter_state);
        tracing::debug!(
            "filtering {} results with {} active tags: {} visible",
            self.result_set.len(),
            filter_state.len(),
            decisions.visible_count()
        );
        let report = self.apply_decisions(&decisions);
        self.decisions = Some(decisions);
        report
    }

    /// Attaches the markers of the freshly initialized map and switches to
    /// map mode. The layer is brought in line with the last decisions.
    pub fn load_map(
        &mut self,
        markers: impl IntoIterator<Item = (ResultId, MarkerId)>,
        layer: M,
    ) -> Result<SyncReport, ResultSetError> {
        self.result_set.attach_markers(markers)?;
        tracing::info!("map loaded for {} results, markers now follow the filters", self.result_set.len());
        self.marker_layer = Some(layer);
        let report = match self.decisions.take() {
            Some(decisions) => {
                let report = self.apply_decisions(&decisions);
                self.decisions = Some(decisions);
                report
            }
            None => SyncReport::default(),
        };
        Ok(report)
    }

    /// Marker of a result, to focus it on the map.
    pub fn locate_marker(&self, id: &ResultId) -> Option<MarkerId> {
        if self.marker_layer.is_none() {
            return None;
        }
        self.result_set.get(id).and_then(|record| record.marker())
    }

    fn apply_decisions(&mut self, decisions: &VisibilityDecisions) -> SyncReport {
        let views = match self.marker_layer.as_mut() {
            Some(layer) => ViewContext::ListAndMap(&mut self.list, layer),
            None => ViewContext::ListOnly(&mut self.list),
        };
        apply(&self.result_set, decisions, views)
    }
}
