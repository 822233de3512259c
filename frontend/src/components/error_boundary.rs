//! Error boundaries and the panel they render.

use dioxus::prelude::*;

fn describe(err: &ErrorContext) -> String {
    match err.error() {
        Some(e) => format!("{:#?}", e.0),
        None => "Unknown error".to_string(),
    }
}

/// Replaces the whole page; the only way out is a new search.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| rsx! {
                ErrorPanel {
                    title: "Something went wrong",
                    details: describe(&err),
                    div { style: "color:darkred; font-size: 18px;", "While rendering: {boundary_name}" }
                    a {
                        href: "/",
                        style: "color:blue; font-size: 18px; border: 1px solid blue; padding: 8px; border-radius: 5px;",
                        "Start a new search"
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing part (the map) from taking the results list down with it.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let details = describe(&err);
                rsx! {
                    ErrorPanel {
                        title: "This part of the page failed",
                        details,
                        button {
                            style: "color:blue; font-size: 18px; border: 1px solid blue; padding: 8px; border-radius: 5px;",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            div { style: "width: 100%; height: 100%;", {children} }
        }
    }
}

#[component]
pub fn ErrorPanel(title: ReadSignal<String>, details: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 10px;
                width: 100%;
                height: 100%;
                padding: 15px;
                box-sizing: border-box;
            ",
            h2 { style: "color:red; font-size: 26px; margin: 0;", "{title}" }
            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{details}"
            }
            {children}
        }
    }
}
