//! Client call to the results endpoint.

use anyhow::Context;
use common::{search_const::RESULTS_ENDPOINT, SearchOutcome, SearchParams, SearchResponse};
use dioxus::logger::tracing;


/// Posts the search form and turns the answer into a filterable outcome.
/// A non-ok status surfaces as an error carrying the server's message.
pub async fn request_results(params: SearchParams) -> anyhow::Result<SearchOutcome> {
    let origin = web_sys::window()
        .context("no browser window")?
        .location()
        .origin()
        .map_err(|e| anyhow::anyhow!("cannot read page origin: {e:?}"))?;
    let url = format!("{origin}{RESULTS_ENDPOINT}");

    tracing::info!("Starting request...");
    let response = reqwest::Client::new()
        .post(&url)
        .form(&params.as_form())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("request to {url} failed"))?
        .json::<SearchResponse>()
        .await
        .context("unreadable search response")?;
    tracing::debug!("received status {:?}", response.status);
    let outcome = response.into_outcome()?;
    tracing::info!("Success! {} results", outcome.result_set.len());
    Ok(outcome)
}
