//! Search parameters sent to the results endpoint.

use serde::{Deserialize, Serialize};

use crate::error::SearchParamsError;
use crate::search_const::{COORDINATE_DECIMALS, RADIUS_BOUNDS, RADIUS_STEP};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub search_preset_id: u64,
    pub user_latitude: f64,
    pub user_longitude: f64,
    pub radius: u32,
    pub no_private: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            search_preset_id: 0,
            user_latitude: 0.0,
            user_longitude: 0.0,
            radius: 500,
            no_private: true,
        }
    }
}

impl SearchParams {
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<SearchParamsError>> {
        let mut errors = Vec::new();
        if self.search_preset_id == 0 {
            errors.push(SearchParamsError::MissingPreset);
        }
        let (min, max) = RADIUS_BOUNDS;
        if self.radius % RADIUS_STEP != 0 || !(min..=max).contains(&self.radius) {
            errors.push(SearchParamsError::Radius { radius: self.radius, step: RADIUS_STEP, min, max });
        }
        if !(-90.0..=90.0).contains(&self.user_latitude) {
            errors.push(SearchParamsError::Latitude(self.user_latitude));
        }
        if !(-180.0..=180.0).contains(&self.user_longitude) {
            errors.push(SearchParamsError::Longitude(self.user_longitude));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Form fields posted to the results endpoint.
    pub fn as_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("radius", self.radius.to_string()),
            ("user_latitude", self.user_latitude.to_string()),
            ("user_longitude", self.user_longitude.to_string()),
            ("search_preset_id", self.search_preset_id.to_string()),
            ("no_private", self.no_private.to_string()),
        ]
    }
}

pub fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_DECIMALS);
    (value * factor).round() / factor
}
