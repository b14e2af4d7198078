use serde::Deserialize;

/// WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `[lat, lon]`, the array form Leaflet accepts for a `LatLngExpression`.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}
