pub mod error_boundary;
pub mod loading;
pub mod navbar;
pub mod results_components;
