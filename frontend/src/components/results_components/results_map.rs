use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_maps_icons::MdMap};

use common::{Coordinates, MapResultEntry};
use crate::{
    components::error_boundary::ErrorPanel,
    data_definitions::filter_views::ResultsFilterContext,
    map::leaflet::MAP_ELEMENT_ID,
};


/// The map is only built on request. Once it is there, the filters drive
/// its markers along with the list.
#[component]
pub fn ResultsMap(entries: ReadSignal<Vec<MapResultEntry>>, user_position: ReadSignal<Coordinates>) -> Element {
    let ctx = use_context::<ResultsFilterContext>();
    let mut map_requested = use_signal(|| false);
    let mut map_error = use_signal(|| None::<String>);

    if let Some(details) = map_error() {
        return rsx! { ErrorPanel { title: "The map could not be loaded", details } };
    }

    rsx! {
        if map_requested() {
            div {
                id: MAP_ELEMENT_ID,
                style: "width: 100%; height: 100%; min-height: 400px;",
                onmounted: move |_| {
                    if let Err(e) = ctx.load_map(&entries.read(), user_position()) {
                        tracing::error!("Map failed to load: {e:#}");
                        map_error.set(Some(format!("{e:#}")));
                    }
                },
            }
        } else {
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    height: 100%;
                ",
                button {
                    id: "load_map",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 10px;
                        height: 42px;
                        padding: 0 18px;
                        border-radius: 9999px;
                        border: 1px solid rgba(0,0,0,0.3);
                        background: white;
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    disabled: entries.read().is_empty(),
                    onclick: move |_| map_requested.set(true),
                    Icon { icon: MdMap, style: "width: 20px; height: 20px; color:#4F46E5;" }
                    "Show the map"
                }
            }
        }
    }
}
