//! Error types of the filtering core.

use thiserror::Error;

use crate::result_set::ResultId;

/// Upstream data errors. Raised when a result set is built or when markers
/// are attached to it; the offending input is never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultSetError {
    #[error("duplicate result id: {0}")]
    DuplicateId(ResultId),

    #[error("result {0} has no tag field")]
    MissingTags(ResultId),

    #[error("result at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("no result with id {0} in the current result set")]
    UnknownResult(ResultId),

    #[error("result {0} was given more than one marker")]
    DuplicateMarker(ResultId),

    #[error("markers were already attached to this result set")]
    MarkersAlreadyAttached,
}

/// A record the view synchronizer had to skip. These are reported, logged
/// and never abort a filtering pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncIssue {
    #[error("decision for {0}, which is not part of the result set")]
    UnknownRecord(ResultId),

    #[error("no list element `{element_id}` for result {id}")]
    MissingListElement { id: ResultId, element_id: String },

    #[error("the map does not know the marker of result {0}")]
    MissingMarker(ResultId),
}

/// A search request that completed but did not yield a usable result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("{err_msg}")]
    Server { err_msg: String, debug_msg: String },

    #[error("malformed result set: {0}")]
    Malformed(#[from] ResultSetError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchParamsError {
    #[error("a search preset must be chosen")]
    MissingPreset,

    #[error("radius {radius} must be a multiple of {step} between {min} and {max} metres")]
    Radius { radius: u32, step: u32, min: u32, max: u32 },

    #[error("latitude {0} is out of range")]
    Latitude(f64),

    #[error("longitude {0} is out of range")]
    Longitude(f64),
}
