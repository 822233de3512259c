//! Device position through the browser geolocation API.

use common::search_const::GEOLOCATION_TIMEOUT_MS;
use common::search_query::round_coordinate;
use common::Coordinates;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};


#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    Failed { code: u16, message: String },
}

impl GeolocationError {
    fn from_js(value: JsValue) -> Self {
        match value.dyn_ref::<GeolocationPositionError>() {
            Some(err) if err.code() == GeolocationPositionError::PERMISSION_DENIED => Self::PermissionDenied,
            Some(err) => Self::Failed { code: err.code(), message: err.message() },
            None => Self::Failed { code: 0, message: format!("{value:?}") },
        }
    }
}

impl std::fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "Your browser does not seem to support geolocation."),
            Self::PermissionDenied => {
                write!(f, "Geolocation was blocked. Check that this site is allowed to use your position.")
            }
            Self::Failed { code, message } => write!(f, "Error {code}. {message}"),
        }
    }
}

/// Asks the device for its position, rounded like a typed-in one.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let geolocation = web_sys::window()
        .and_then(|w| w.navigator().geolocation().ok())
        .ok_or(GeolocationError::Unsupported)?;
    let options = PositionOptions::new();
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);

    let mut request_error = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &options) {
            request_error = Some(e);
        }
    });
    if let Some(e) = request_error {
        return Err(GeolocationError::from_js(e));
    }

    let position: GeolocationPosition = JsFuture::from(promise)
        .await
        .and_then(|value| value.dyn_into())
        .map_err(GeolocationError::from_js)?;
    let coords = position.coords();
    Ok(Coordinates(round_coordinate(coords.latitude()), round_coordinate(coords.longitude())))
}
