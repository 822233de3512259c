//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;
use dioxus_free_icons::Icon;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id:"x-nav-topbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 52px;
                    padding: 0 16px;
                    background-color: #1C212D;
                    border-bottom: 1px solid #000000;
                    flex-shrink: 0;
                ",
                Link {
                    to: Route::HomePage {},
                    span {
                        style: "display:flex; align-items:center; gap: 6px; color:white; font-size: 22px;",
                        Icon { icon: MdLocationOn, style: "width: 28px; height: 28px;" }
                        "Goose"
                    }
                }
                div { style: "flex-grow:1;" }
                Link {
                    to: Route::HomePage {},
                    span {
                        style: "color:white;",
                        title: "New search",
                        Icon { icon: MdHome, style: "width: 26px; height: 26px;" }
                    }
                }
            }

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
