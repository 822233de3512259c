//! Constants shared between the filtering core and the frontend.

/// Separator of the tag annotation carried by every rendered result.
pub const TAG_DELIMITER: char = ';';

/// Prefix of the DOM id of a result list element: `result-{id}`.
pub const LIST_ELEMENT_ID_PREFIX: &str = "result-";

/// Smallest and largest search radius accepted, in metres.
pub const RADIUS_BOUNDS: (u32, u32) = (100, 2000);
pub const RADIUS_STEP: u32 = 10;

/// Geolocated positions are rounded to this many decimals before being sent.
pub const COORDINATE_DECIMALS: i32 = 5;

/// How long the device may take to report its position.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

pub const DEFAULT_MAP_ZOOM: u8 = 15;

pub const RESULTS_ENDPOINT: &str = "/getresults/";
