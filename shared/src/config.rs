use serde::Deserialize;

use crate::geo::LatLng;

pub const MAP_ELEMENT_ID: &str = "map";
pub const INITIAL_CENTER: LatLng = LatLng::new(8.359735, 124.869206);
pub const INITIAL_ZOOM: f64 = 18.0;

pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: f64 = 19.0;
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors | Sample for new corales BSIT student";

pub const MARKER_FEED_URL: &str = "applet-2.json";

// Page controls
pub const SC_BUTTON_ID: &str = "btn";
pub const BA_BUTTON_ID: &str = "btn1";
pub const LAB_BUTTON_ID: &str = "btn2";
pub const CLEAR_BUTTON_ID: &str = "btnclear";
pub const SC_DISPLAY_ID: &str = "logCount";
pub const BA_DISPLAY_ID: &str = "logCountBA";
pub const LAB_DISPLAY_ID: &str = "logCountCCS";
pub const LOG_CONTAINER_ID: &str = "logContainer";

/// Optional page-embedded JSON that overrides [`WidgetConfig`] fields.
pub const CONFIG_SCRIPT_ID: &str = "attendance-config";

pub const SC_COORDS: LatLng = LatLng::new(8.360283, 124.867513);
pub const BA_COORDS: LatLng = LatLng::new(8.359219, 124.868583);
pub const LAB_COORDS: LatLng = LatLng::new(8.359667, 124.869179);

/// Runtime view of the constants above. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub map_element_id: String,
    pub center: LatLng,
    pub zoom: f64,
    pub tile_url: String,
    pub tile_max_zoom: f64,
    pub tile_attribution: String,
    pub feed_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            map_element_id: MAP_ELEMENT_ID.to_string(),
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
            tile_url: TILE_URL_TEMPLATE.to_string(),
            tile_max_zoom: TILE_MAX_ZOOM,
            tile_attribution: TILE_ATTRIBUTION.to_string(),
            feed_url: MARKER_FEED_URL.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Apply a JSON override on top of the defaults.
    pub fn from_override_json(raw: &str) -> Result<Self, serde_json::Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = WidgetConfig::default();
        assert_eq!(config.map_element_id, "map");
        assert_eq!(config.center, LatLng::new(8.359735, 124.869206));
        assert_eq!(config.zoom, 18.0);
        assert_eq!(config.tile_max_zoom, 19.0);
        assert_eq!(config.feed_url, "applet-2.json");
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config =
            WidgetConfig::from_override_json(r#"{"feed_url": "/data/markers.json", "zoom": 17}"#)
                .unwrap();
        assert_eq!(config.feed_url, "/data/markers.json");
        assert_eq!(config.zoom, 17.0);
        assert_eq!(config.map_element_id, MAP_ELEMENT_ID);
        assert_eq!(config.tile_url, TILE_URL_TEMPLATE);
    }

    #[test]
    fn center_override_uses_feed_field_names() {
        let config = WidgetConfig::from_override_json(
            r#"{"center": {"latitude": 1.5, "longitude": -2.25}}"#,
        )
        .unwrap();
        assert_eq!(config.center, LatLng::new(1.5, -2.25));
    }

    #[test]
    fn blank_override_is_default() {
        assert_eq!(
            WidgetConfig::from_override_json("  \n").unwrap(),
            WidgetConfig::default()
        );
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(WidgetConfig::from_override_json("{feed_url:").is_err());
    }
}
