use crate::attendance::AttendanceCounters;
use crate::building::Building;
use crate::feed::{MarkerFeedEntry, parse_feed};
use crate::geo::LatLng;
use crate::popup::{attendance_text, popup_html};
use crate::registry::MarkerClickRegistry;

/// The map library as seen by the session: it places pins and shows popups.
pub trait MapSurface {
    type Marker;

    fn place_marker(&mut self, position: LatLng) -> Self::Marker;

    /// Bind `html` as the marker's popup content and open it.
    fn show_popup(&mut self, marker: &Self::Marker, html: &str);
}

/// Index into the session's marker list. Stable because the list never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(usize);

impl MarkerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A marker on the map together with the label it was created under.
#[derive(Debug, Clone)]
pub struct PlacedMarker<M> {
    pub label: String,
    pub position: LatLng,
    pub handle: M,
}

/// All state behind the attendance map: counters, label click counts and placed markers.
pub struct AttendanceSession<S: MapSurface> {
    surface: S,
    counters: AttendanceCounters,
    registry: MarkerClickRegistry,
    markers: Vec<PlacedMarker<S::Marker>>,
    // Never written by any control; only emptied on reset.
    logged_entries: Vec<String>,
}

impl<S: MapSurface> AttendanceSession<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            counters: AttendanceCounters::new(),
            registry: MarkerClickRegistry::new(),
            markers: Vec::new(),
            logged_entries: Vec::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn counters(&self) -> &AttendanceCounters {
        &self.counters
    }

    pub fn registry(&self) -> &MarkerClickRegistry {
        &self.registry
    }

    pub fn markers(&self) -> &[PlacedMarker<S::Marker>] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&PlacedMarker<S::Marker>> {
        self.markers.get(id.0)
    }

    pub fn logged_entries(&self) -> &[String] {
        &self.logged_entries
    }

    /// Place a marker, count it under `label` and open its popup.
    pub fn add_map_marker(&mut self, position: LatLng, label: impl Into<String>) -> MarkerId {
        let label = label.into();
        let handle = self.surface.place_marker(position);
        let count = self.registry.bump(&label);
        self.surface.show_popup(&handle, &popup_html(&label, count));

        let id = MarkerId(self.markers.len());
        self.markers.push(PlacedMarker {
            label,
            position,
            handle,
        });
        id
    }

    /// A click on a placed marker: bump its label and refresh that marker's popup.
    pub fn click_marker(&mut self, id: MarkerId) -> Option<u32> {
        let marker = self.markers.get(id.0)?;
        let count = self.registry.bump(&marker.label);
        self.surface
            .show_popup(&marker.handle, &popup_html(&marker.label, count));
        Some(count)
    }

    /// Drop a marker on `building` and count one attendance for it.
    pub fn record_attendance(&mut self, building: Building) -> MarkerId {
        let id = self.add_map_marker(building.coordinates(), building.marker_label());
        self.counters.increment(building);
        id
    }

    /// Place every feed entry in order, labelled by its message.
    pub fn add_feed_entries(&mut self, entries: &[MarkerFeedEntry]) -> Vec<MarkerId> {
        entries
            .iter()
            .map(|entry| self.add_map_marker(entry.position(), entry.message.clone()))
            .collect()
    }

    /// Parse a feed body and place its entries. A body that does not parse places nothing.
    pub fn load_feed_body(&mut self, body: &str) -> Result<Vec<MarkerId>, serde_json::Error> {
        let entries = parse_feed(body)?;
        Ok(self.add_feed_entries(&entries))
    }

    /// Zero every counter and every marker's label count. Markers stay on the map.
    pub fn reset_attendance_logs(&mut self) {
        self.counters.reset();
        self.logged_entries.clear();
        self.registry.clear();

        for marker in &self.markers {
            self.registry.set_zero(&marker.label);
            self.surface
                .show_popup(&marker.handle, &popup_html(&marker.label, 0));
        }
    }

    /// Display element id and text for each building counter.
    pub fn log_count_lines(&self) -> Vec<(&'static str, String)> {
        self.counters
            .iter()
            .map(|(b, count)| (b.display_element_id(), attendance_text(b, count)))
            .collect()
    }
}
