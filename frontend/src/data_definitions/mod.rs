pub mod filter_views;
pub mod url_param;
