use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use common::TagFilterItem;
use crate::data_definitions::filter_views::ResultsFilterContext;


/// One checkbox per tag of the current result set.
#[component]
pub fn TagFilterPanel(filters: ReadSignal<Vec<TagFilterItem>>) -> Element {
    rsx! {
        div {
            id: "results_filters",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 6px;
                padding: 6px;
                margin-bottom: 8px;
                background-color: white;
                border-radius: 8px;
            ",
            if filters.read().is_empty() {
                div {
                    style: "font-style: italic; color: rgba(0,0,0,0.6); padding: 4px;",
                    "No tags to filter on."
                }
            }
            for item in filters.read().iter() {
                TagCheckbox {
                    key: "{item.value}",
                    value: item.value.clone(),
                    count: item.count,
                }
            }
        }
    }
}

#[component]
fn TagCheckbox(value: ReadSignal<String>, count: ReadSignal<u64>) -> Element {
    let ctx = use_context::<ResultsFilterContext>();
    let controls = ctx.controls;
    let is_checked = use_memo(move || {
        let value = value.read();
        controls.read().iter().any(|c| c.value == *value && c.active)
    });

    rsx! {
        div {
            class: "x-tag-filter-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                cursor: pointer;
                padding: 4px 8px;
                align-items: center;
                border-radius: 9999px;
            ",
            onclick: move |_e| {
                let value = value.read().clone();
                ctx.set_control(&value, !is_checked());
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "font-size: 16px; line-height: 22px; white-space: nowrap;",
                "{value}"
            }
            div {
                style: "font-size: 14px; color: rgba(0,0,0,0.6);",
                "({count})"
            }
        }
    }
}
