use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdLink};

use crate::data_definitions::filter_views::ResultsFilterContext;


#[component]
pub fn ResultsHeader(result_count: ReadSignal<usize>) -> Element {
    let ctx = use_context::<ResultsFilterContext>();
    let visible_count = use_memo(move || {
        let session = ctx.session.read();
        session.decisions().map(|d| d.visible_count()).unwrap_or(result_count())
    });
    let mut link_copied = use_signal(|| false);

    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(url) = window.location().href() else {
            tracing::warn!("Cannot read the page address.");
            return;
        };
        let _r = window.navigator().clipboard().write_text(&url);
        tracing::info!("Link copied to clipboard: {:#?}", url);
        link_copied.set(true);
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 6px;
                font-size: 18px;
            ",
            div { "Showing {visible_count} of {result_count} results" }
            div { style: "flex: 1 1 auto;" }
            button {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 14px;
                ",
                onclick: move |_| do_copy_link.call(()),
                Icon { icon: MdLink, style: "width: 20px; height: 20px;" }
                if link_copied() { "Link copied" } else { "Copy link" }
            }
        }
    }
}
