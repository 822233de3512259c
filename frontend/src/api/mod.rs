pub mod geolocation;
pub mod search_api;
