//! Bindings to the page's global Leaflet (`L`) and the [`MapSurface`] built on them.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use campus_shared::{LatLng, MapSurface, WidgetConfig};

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    max_zoom: f64,
    attribution: &'a str,
}

fn lat_lng(position: LatLng) -> JsValue {
    let [lat, lon] = position.to_array();
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lon)).into()
}

/// A Leaflet map with its base tile layer attached.
pub struct LeafletSurface {
    map: Map,
}

impl LeafletSurface {
    /// Create the map in the configured container, set the view and add OSM tiles.
    pub fn create(config: &WidgetConfig) -> Result<Self, String> {
        let map = create_map(&config.map_element_id)
            .map_err(|e| format!("leaflet map init failed: {e:?}"))?;
        map.set_view(&lat_lng(config.center), config.zoom);

        let options = serde_wasm_bindgen::to_value(&TileLayerOptions {
            max_zoom: config.tile_max_zoom,
            attribution: &config.tile_attribution,
        })
        .map_err(|e| format!("tile options: {e}"))?;
        create_tile_layer(&config.tile_url, &options).add_layer_to(&map);

        Ok(Self { map })
    }
}

impl MapSurface for LeafletSurface {
    type Marker = Marker;

    fn place_marker(&mut self, position: LatLng) -> Marker {
        create_marker(&lat_lng(position)).add_marker_to(&self.map)
    }

    fn show_popup(&mut self, marker: &Marker, html: &str) {
        marker.bind_popup(html).open_popup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_options_use_leaflet_option_names() {
        let config = WidgetConfig::default();
        let value = serde_json::to_value(TileLayerOptions {
            max_zoom: config.tile_max_zoom,
            attribution: &config.tile_attribution,
        })
        .unwrap();
        assert_eq!(value["maxZoom"], 19.0);
        assert!(
            value["attribution"]
                .as_str()
                .unwrap()
                .ends_with("Sample for new corales BSIT student")
        );
    }
}
