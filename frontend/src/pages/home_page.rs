use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;
use dioxus_free_icons::icons::md_maps_icons::MdMyLocation;
use dioxus_free_icons::Icon;

use common::search_const::{RADIUS_BOUNDS, RADIUS_STEP};
use common::search_query::{round_coordinate, SearchParams};
use crate::api::geolocation::{current_position, GeolocationError};
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Goose - Search around you" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            PositionSearchCard {}
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            Icon { icon: MdLocationOn, style: "width: 46px; height: 46px; color:#4F46E5;" }
            span { "Search around" }
            span { style: "color:#4F46E5;", "you" }
        }
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, label: &str, errors: &mut Vec<String>) -> Option<T> {
    if raw.trim().is_empty() {
        errors.push(format!("{label} is required."));
        return None;
    }
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(format!("{label} is not a number."));
            None
        }
    }
}

#[component]
fn PositionSearchCard() -> Element {
    let n2 = navigator();
    let defaults = SearchParams::default();
    let radius_label = format!("Radius (m, {}-{}, step {})", RADIUS_BOUNDS.0, RADIUS_BOUNDS.1, RADIUS_STEP);
    let mut latitude = use_signal(|| "".to_string());
    let mut longitude = use_signal(|| "".to_string());
    let mut radius = use_signal(|| defaults.radius.to_string());
    let mut preset = use_signal(|| "".to_string());
    let mut no_private = use_signal(|| defaults.no_private);
    let mut errors = use_signal(Vec::<String>::new);
    let mut geolocation_error = use_signal(|| None::<GeolocationError>);
    let mut locating = use_signal(|| false);

    let locate = move |_: Event<MouseData>| {
        locating.set(true);
        spawn(async move {
            match current_position().await {
                Ok(position) => {
                    tracing::info!("Device position: {position:?}");
                    latitude.set(position.latitude().to_string());
                    longitude.set(position.longitude().to_string());
                    geolocation_error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Geolocation failed: {e}");
                    geolocation_error.set(Some(e));
                }
            }
            locating.set(false);
        });
    };

    let mut submit = move |_: ()| {
        let mut found = Vec::new();
        let user_latitude = parse_field::<f64>(&latitude.read(), "Latitude", &mut found);
        let user_longitude = parse_field::<f64>(&longitude.read(), "Longitude", &mut found);
        let radius = parse_field::<u32>(&radius.read(), "Radius", &mut found);
        let search_preset_id = parse_field::<u64>(&preset.read(), "Search preset", &mut found);
        let (Some(user_latitude), Some(user_longitude), Some(radius), Some(search_preset_id)) =
            (user_latitude, user_longitude, radius, search_preset_id)
        else {
            errors.set(found);
            return;
        };
        let params = SearchParams {
            search_preset_id,
            user_latitude: round_coordinate(user_latitude),
            user_longitude: round_coordinate(user_longitude),
            radius,
            no_private: *no_private.read(),
        };
        if let Err(invalid) = params.validate() {
            errors.set(invalid.iter().map(|e| e.to_string()).collect());
            return;
        }
        errors.set(Vec::new());
        n2.push(Route::results_page_from_params(params));
    };

    rsx! {
        div {
            id: "x-card-position-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Position" }
            button {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 8px;
                    width: fit-content;
                    padding: 8px 14px;
                    border-radius: 9999px;
                    border: 1px solid white;
                    background: none;
                    color: white;
                    font-size: 16px;
                    cursor: pointer;
                ",
                disabled: locating(),
                onclick: locate,
                Icon { icon: MdMyLocation, style: "width: 20px; height: 20px;" }
                if locating() { "Locating..." } else { "Use my position" }
            }
            {match geolocation_error() {
                Some(denied @ GeolocationError::PermissionDenied) => rsx! {
                    div {
                        style: "background: #FEF3C7; color: #92400E; border-radius: 8px; padding: 8px 12px; font-size: 15px;",
                        "{denied}"
                    }
                },
                Some(other) => rsx! {
                    div { style: "color: #FECACA; font-size: 16px;", "{other}" }
                },
                None => rsx! {},
            }}
            FieldInput { label: "Latitude", value: latitude(), oninput: move |v| latitude.set(v) }
            FieldInput { label: "Longitude", value: longitude(), oninput: move |v| longitude.set(v) }
            FieldInput {
                label: radius_label,
                value: radius(),
                oninput: move |v| radius.set(v),
            }
            FieldInput { label: "Search preset", value: preset(), oninput: move |v| preset.set(v) }
            label {
                style: "display:flex; align-items:center; gap: 8px; font-size: 16px;",
                input {
                    r#type: "checkbox",
                    checked: no_private(),
                    onchange: move |_| {
                        let current = *no_private.read();
                        no_private.set(!current);
                    },
                }
                "Exclude private access results"
            }

            for error in errors.read().iter() {
                div { style: "color: #FECACA; font-size: 16px;", "{error}" }
            }

            button {
                style: "
                    display:flex;
                    align-items:center;
                    justify-content:center;
                    gap: 10px;
                    height: 42px;
                    border-radius: 9999px;
                    border: none;
                    background: white;
                    color: #111827;
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| submit(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                "Search"
            }
        }
    }
}

#[component]
fn FieldInput(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            style: "display:flex; flex-direction: column; gap: 4px; font-size: 16px;",
            "{label}"
            input {
                r#type: "text",
                style: "
                    border: none;
                    outline: none;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    color: #111827;
                    font-size: 14px;
                ",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}
