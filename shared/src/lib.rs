pub mod attendance;
pub mod building;
pub mod config;
pub mod feed;
pub mod geo;
pub mod popup;
pub mod registry;
pub mod session;

pub use attendance::AttendanceCounters;
pub use building::Building;
pub use config::WidgetConfig;
pub use feed::{MarkerFeedEntry, parse_feed};
pub use geo::LatLng;
pub use registry::MarkerClickRegistry;
pub use session::{AttendanceSession, MapSurface, MarkerId, PlacedMarker};
