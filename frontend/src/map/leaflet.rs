//! Leaflet bindings and the marker layer the filters drive.
//!
//! Leaflet itself is loaded as a script by the app shell; everything here
//! goes through the global `L` namespace.

use std::collections::BTreeMap;

use anyhow::anyhow;
use common::search_const::DEFAULT_MAP_ZOOM;
use common::{Coordinates, MapResultEntry, MarkerId, MarkerLayer, ResultId};
use dioxus::logger::tracing;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub const MAP_ELEMENT_ID: &str = "leaflet-map";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_COPYRIGHT: &str = "&copy; OpenStreetMap contributors";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_feature_group(this: &LeafletMap, layer: &FeatureGroup) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tile_layer_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    pub type FeatureGroup;

    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    fn feature_group() -> FeatureGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &FeatureGroup, marker: &Marker) -> FeatureGroup;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &FeatureGroup, marker: &Marker) -> FeatureGroup;

    #[wasm_bindgen(method, js_name = hasLayer)]
    fn has_layer(this: &FeatureGroup, marker: &Marker) -> bool;

    #[wasm_bindgen(method, js_name = getBounds)]
    fn get_bounds(this: &FeatureGroup) -> LatLngBounds;

    pub type LatLngBounds;

    #[wasm_bindgen(method, js_name = getCenter)]
    fn get_center(this: &LatLngBounds) -> JsValue;
}

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
}

fn lat_lng(position: Coordinates) -> anyhow::Result<JsValue> {
    serde_wasm_bindgen::to_value(&[position.latitude(), position.longitude()])
        .map_err(|e| anyhow!("cannot convert coordinates: {e}"))
}

/// Markers of the current result set, shown through one feature group.
pub struct LeafletMarkerLayer {
    map: LeafletMap,
    group: FeatureGroup,
    markers: BTreeMap<MarkerId, Marker>,
}

impl LeafletMarkerLayer {
    /// Creates the map, one marker per entry and the "you are here" marker.
    /// Returns the layer and the marker handle of each result.
    pub fn create(
        element_id: &str,
        entries: &[MapResultEntry],
        user_position: Coordinates,
    ) -> anyhow::Result<(Self, Vec<(ResultId, MarkerId)>)> {
        tracing::info!("Loading the map.");
        let map = create_map(element_id).map_err(|e| anyhow!("Leaflet failed to create the map: {e:?}"))?;
        let options = serde_wasm_bindgen::to_value(&TileLayerOptions { attribution: MAP_COPYRIGHT })
            .map_err(|e| anyhow!("cannot convert tile options: {e}"))?;
        tile_layer(TILE_URL, &options).add_tile_layer_to(&map);

        tracing::info!("Adding {} markers.", entries.len());
        let group = feature_group();
        let mut markers = BTreeMap::new();
        let mut handles = Vec::with_capacity(entries.len());
        for (index, MapResultEntry(id, position, popup)) in entries.iter().enumerate() {
            let handle = MarkerId(index as u32);
            let result_marker = marker(&lat_lng(*position)?);
            result_marker.bind_popup(popup);
            group.add_layer(&result_marker);
            markers.insert(handle, result_marker);
            handles.push((id.clone(), handle));
        }
        map.add_feature_group(&group);

        marker(&lat_lng(user_position)?).add_marker_to(&map).bind_popup("You are here");

        let center = if entries.is_empty() { lat_lng(user_position)? } else { group.get_bounds().get_center() };
        map.set_view(&center, DEFAULT_MAP_ZOOM);
        map.invalidate_size();

        Ok((Self { map, group, markers }, handles))
    }

    /// The map container may have been resized since creation.
    pub fn open_popup(&self, marker: MarkerId) {
        if let Some(found) = self.markers.get(&marker) {
            self.map.invalidate_size();
            found.open_popup();
        }
    }
}

impl MarkerLayer for LeafletMarkerLayer {
    fn knows_marker(&self, marker: MarkerId) -> bool {
        self.markers.contains_key(&marker)
    }

    fn has_marker(&self, marker: MarkerId) -> bool {
        self.markers.get(&marker).is_some_and(|m| self.group.has_layer(m))
    }

    fn add_marker(&mut self, marker: MarkerId) {
        if let Some(found) = self.markers.get(&marker) {
            self.group.add_layer(found);
        }
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        if let Some(found) = self.markers.get(&marker) {
            self.group.remove_layer(found);
        }
    }
}
