use serde::Deserialize;

use crate::geo::LatLng;

/// One entry of the marker feed (`applet-2.json`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkerFeedEntry {
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
}

impl MarkerFeedEntry {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Parse a feed body. The top level must be an array.
pub fn parse_feed(body: &str) -> Result<Vec<MarkerFeedEntry>, serde_json::Error> {
    serde_json::from_str(body)
}
