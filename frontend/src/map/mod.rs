// wasm-bindgen extern glue expands to unsafe blocks
#[allow(unsafe_code)]
pub mod leaflet;
