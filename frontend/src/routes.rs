use dioxus::prelude::*;

use common::search_query::SearchParams;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::results_page::ResultsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/results/:params")]
    ResultsPage { params: UrlParam<SearchParams> },

}

impl Route {
    pub fn results_page_from_params(params: SearchParams) -> Self {
        Self::ResultsPage { params: UrlParam::from(params) }
    }
}
