//! Wire format of the results endpoint and its conversion into a result set.

use serde::{Deserialize, Serialize};

use crate::error::SearchFailure;
use crate::result_set::{ResultId, ResultSet};
use crate::tag_filter::{build_tag_filter_with_counts, TagFilterItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// One result as rendered by the server: an HTML fragment plus the
/// `;`-delimited tag annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedResult {
    pub id: ResultId,
    pub tags: Option<String>,
    pub html: String,
}

/// `[lat, lon]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

/// `[id, [lat, lon], popup]`, one per result that can be shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResultEntry(pub ResultId, pub Coordinates, pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub content: Vec<RenderedResult>,
    #[serde(default)]
    pub map_results: Vec<MapResultEntry>,
    #[serde(default)]
    pub filters: Vec<TagFilterItem>,
    #[serde(default)]
    pub err_msg: String,
    #[serde(default)]
    pub debug_msg: String,
}

/// A successful search, ready to be rendered and filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub result_set: ResultSet,
    pub rendered: Vec<RenderedResult>,
    pub map_results: Vec<MapResultEntry>,
    pub filters: Vec<TagFilterItem>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.result_set.is_empty()
    }
}

impl SearchResponse {
    pub fn into_outcome(self) -> Result<SearchOutcome, SearchFailure> {
        if self.status != ResponseStatus::Ok {
            tracing::debug!("search failed: {}", self.debug_msg);
            return Err(SearchFailure::Server { err_msg: self.err_msg, debug_msg: self.debug_msg });
        }
        let result_set = ResultSet::from_rendered(&self.content)?;
        let filters = build_tag_filter_with_counts(&result_set, &self.filters);
        Ok(SearchOutcome { result_set, rendered: self.content, map_results: self.map_results, filters })
    }
}

/// Server fragments use plain newlines; the list shows them as line breaks.
pub fn line_breaks_to_html(fragment: &str) -> String {
    fragment.replace("\r\n", "\n").replace('\n', "<br>\n")
}
