//! Result filtering and list/map synchronization shared by the frontend.

extern crate serde;


pub mod error;
pub mod filter_session;
pub mod filter_state;
pub mod result_set;
pub mod search_const;
pub mod search_query;
pub mod search_response;
pub mod tag_filter;
pub mod view_sync;
pub mod visibility;

pub use error::{ResultSetError, SearchFailure, SearchParamsError, SyncIssue};
pub use filter_session::FilterSession;
pub use filter_state::{FilterOption, FilterState};
pub use result_set::{parse_tags, MarkerId, ResultId, ResultRecord, ResultSet};
pub use search_query::SearchParams;
pub use search_response::{Coordinates, MapResultEntry, RenderedResult, SearchOutcome, SearchResponse};
pub use tag_filter::{build_tag_filter, build_tag_filter_with_counts, initial_controls, TagFilterItem};
pub use view_sync::{apply, ItemDisplay, ListView, MarkerLayer, SyncReport, ViewContext};
pub use visibility::{decide, VisibilityDecisions};
