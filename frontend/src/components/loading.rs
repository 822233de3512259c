use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            align_items: "center",
            justify_content: "center",
            div {
                id: "geo_results",
                aria_live: "polite",
                aria_busy: "true",
                style: "color:black; font-size: 26px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
                "Loading..."
            }
        }
    }
}
