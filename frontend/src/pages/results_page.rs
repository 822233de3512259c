use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::{initial_controls, Coordinates, FilterSession, SearchOutcome, SearchParams};
use crate::{
    api::search_api::request_results,
    components::{
        results_components::{
            result_list::ResultList, results_header::ResultsHeader, results_map::ResultsMap,
            tag_filter_panel::TagFilterPanel,
        },
        error_boundary::ComponentErrorBoundary,
        loading::LoadingIndicator,
    },
    data_definitions::{filter_views::{ResultsFilterContext, SignalListView}, url_param::UrlParam},
};


/// Results page
#[component]
pub fn ResultsPage(params: UrlParam<SearchParams>) -> Element {
    rsx! {
        Title { "Goose - Results" }
        ResultsPageRootComponent { params: params.0.clone() }
    }
}

#[component]
fn ResultsPageRootComponent(params: ReadSignal<SearchParams>) -> Element {
    let mut search_result = use_resource(move || {
        let p = params.read().clone();
        request_results(p)
    });
    // a new search replaces the result set wholesale: drop the old one so the
    // filterable view is rebuilt instead of reused
    use_effect(move || {
        let _ = params.read();
        search_result.clear();
        search_result.restart();
    });

    let search_result = search_result.read();
    let outcome = match search_result.as_ref() {
        None => return rsx! { LoadingIndicator {} },
        Some(Err(e)) => {
            tracing::error!("Search failed: {e:#}");
            return rsx! { SearchMessage { message: format!("{e}") } };
        }
        Some(Ok(outcome)) if outcome.is_empty() => {
            return rsx! { SearchMessage { message: "No results.".to_string() } };
        }
        Some(Ok(outcome)) => outcome.clone(),
    };

    rsx! {
        FilterableResults { outcome, params: params.read().clone() }
    }
}

#[component]
fn SearchMessage(message: ReadSignal<String>) -> Element {
    rsx! {
        div {
            id: "geo_results",
            aria_live: "assertive",
            aria_busy: "false",
            style: "text-align: center; font-style: italic; font-size: 20px; padding: 30px;",
            "{message}"
        }
    }
}

/// Filtering controls only exist once the request resolved, so the session
/// never sees a partial result set.
#[component]
fn FilterableResults(outcome: ReadSignal<SearchOutcome>, params: ReadSignal<SearchParams>) -> Element {
    let displays = use_signal(|| SignalListView::initial_displays(&outcome.peek().result_set));
    let list_view = SignalListView::new(displays);
    let controls = use_signal(|| initial_controls(&outcome.peek().filters));
    // the first view comes out of the same pass as every later one
    let session = use_signal(|| {
        let mut session = FilterSession::new(outcome.peek().result_set.clone(), list_view);
        let report = session.refilter(controls.peek().iter());
        tracing::info!("Showing {} of {} results", report.shown, report.shown + report.hidden);
        session
    });
    use_context_provider(|| ResultsFilterContext { session, controls, list_view });

    let user_position = {
        let params = params.read();
        Coordinates(params.user_latitude, params.user_longitude)
    };
    let SearchOutcome { rendered, map_results, filters, .. } = outcome.read().clone();

    rsx! {
        div {
            id: "x-results-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
            ",
            div {
                id: "x-results-left-panel",
                style: "
                    height: 100%;
                    background-color: #ECEEF2;
                    min-width: 400px;
                    width: 55%;
                    overflow-y: auto;
                    padding: 7px;
                    box-sizing: border-box;
                ",
                ResultsHeader { result_count: rendered.len() }
                TagFilterPanel { filters }
                ResultList { results: rendered }
            }
            div {
                id: "x-results-right-panel",
                style: "
                    height: 100%;
                    min-width: 300px;
                    width: 45%;
                ",
                ComponentErrorBoundary {
                    ResultsMap { entries: map_results, user_position }
                }
            }
        }
    }
}
