//! The result set of one completed search.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::ResultSetError;
use crate::search_const::{LIST_ELEMENT_ID_PREFIX, TAG_DELIMITER};
use crate::search_response::RenderedResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl ResultId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the list element rendering this result.
    pub fn list_element_id(&self) -> String {
        format!("{LIST_ELEMENT_ID_PREFIX}{}", self.0)
    }
}

impl Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResultId {
    fn from(value: &str) -> Self {
        ResultId(value.to_string())
    }
}

/// Opaque handle of a map marker, issued by the map component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub id: ResultId,
    pub tags: BTreeSet<String>,
    marker: Option<MarkerId>,
}

impl ResultRecord {
    pub fn new<I, S>(id: impl Into<ResultId>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { id: id.into(), tags: tags.into_iter().map(Into::into).collect(), marker: None }
    }

    pub fn marker(&self) -> Option<MarkerId> {
        self.marker
    }
}

/// Splits a `;`-delimited tag annotation. Empty segments are dropped, so an
/// empty annotation means "no tags".
pub fn parse_tags(raw: &str) -> BTreeSet<String> {
    raw.split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Records in server order. Built once per search, read-only afterwards
/// apart from the one-time marker attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    records: Vec<ResultRecord>,
    positions: HashMap<ResultId, usize>,
    markers_attached: bool,
}

impl ResultSet {
    pub fn new(records: Vec<ResultRecord>) -> Result<Self, ResultSetError> {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.0.is_empty() {
                return Err(ResultSetError::EmptyId { position });
            }
            if positions.insert(record.id.clone(), position).is_some() {
                return Err(ResultSetError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, positions, markers_attached: false })
    }

    /// Builds the set from the rendered fragments of a search response.
    pub fn from_rendered(rendered: &[RenderedResult]) -> Result<Self, ResultSetError> {
        let records = rendered
            .iter()
            .map(|item| {
                let Some(raw_tags) = item.tags.as_deref() else {
                    return Err(ResultSetError::MissingTags(item.id.clone()));
                };
                Ok(ResultRecord { id: item.id.clone(), tags: parse_tags(raw_tags), marker: None })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: &ResultId) -> Option<&ResultRecord> {
        self.positions.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_markers(&self) -> bool {
        self.markers_attached
    }

    /// Attaches the markers created by the map component. Happens at most
    /// once; on error the set is left untouched. Records given no marker
    /// have no place on the map.
    pub fn attach_markers(
        &mut self,
        markers: impl IntoIterator<Item = (ResultId, MarkerId)>,
    ) -> Result<(), ResultSetError> {
        let staged = self.stage_markers(markers)?;
        for (position, marker) in staged {
            self.records[position].marker = Some(marker);
        }
        self.markers_attached = true;
        Ok(())
    }

    /// Checks that map entries for these ids could be attached, before any
    /// map is built for them.
    pub fn check_map_entries<'a>(&self, ids: impl IntoIterator<Item = &'a ResultId>) -> Result<(), ResultSetError> {
        let placeholders = ids.into_iter().enumerate().map(|(index, id)| (id.clone(), MarkerId(index as u32)));
        self.stage_markers(placeholders).map(|_| ())
    }

    fn stage_markers(
        &self,
        markers: impl IntoIterator<Item = (ResultId, MarkerId)>,
    ) -> Result<BTreeMap<usize, MarkerId>, ResultSetError> {
        if self.markers_attached {
            return Err(ResultSetError::MarkersAlreadyAttached);
        }
        let mut staged = BTreeMap::new();
        for (id, marker) in markers {
            let Some(&position) = self.positions.get(&id) else {
                return Err(ResultSetError::UnknownResult(id));
            };
            if staged.insert(position, marker).is_some() {
                return Err(ResultSetError::DuplicateMarker(id));
            }
        }
        Ok(staged)
    }

    /// Number of records carrying each tag.
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.records.iter().flat_map(|r| r.tags.iter()) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }
}
