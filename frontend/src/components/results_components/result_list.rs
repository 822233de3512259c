use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_maps_icons::MdPlace};

use common::{RenderedResult, ResultId, search_response::line_breaks_to_html};
use crate::data_definitions::filter_views::ResultsFilterContext;


#[component]
pub fn ResultList(results: ReadSignal<Vec<RenderedResult>>) -> Element {
    rsx! {
        ul {
            id: "results_list",
            style: "list-style: none; margin: 0; padding: 0;",
            for result in results.read().iter() {
                ResultListItem {
                    key: "{result.id}",
                    id: result.id.clone(),
                    html: result.html.clone(),
                }
            }
        }
    }
}

#[component]
fn ResultListItem(id: ReadSignal<ResultId>, html: ReadSignal<String>) -> Element {
    let ctx = use_context::<ResultsFilterContext>();
    let list_view = ctx.list_view;
    let element_id = use_memo(move || id.read().list_element_id());
    let display = use_memo(move || list_view.display_of(&element_id.read()));
    let fragment = use_memo(move || line_breaks_to_html(&html.read()));
    let map_loaded = use_memo(move || ctx.session.read().is_map_loaded());

    rsx! {
        li {
            id: "{element_id}",
            class: "result-box",
            style: "display: {display().css()};",
            div { dangerous_inner_html: "{fragment}" }
            if map_loaded() {
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: none;
                        background: none;
                        color: #4F46E5;
                        cursor: pointer;
                        padding: 4px 0;
                    ",
                    onclick: move |_| ctx.focus_on_map(&id.read()),
                    Icon { icon: MdPlace, style: "width: 18px; height: 18px;" }
                    "See on map"
                }
            }
        }
    }
}
