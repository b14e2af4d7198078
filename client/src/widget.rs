use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use campus_shared::config::{CLEAR_BUTTON_ID, LOG_CONTAINER_ID};
use campus_shared::{AttendanceSession, Building, MarkerId, WidgetConfig};

use crate::feed;
use crate::leaflet::LeafletSurface;
use crate::page::element_or_warn;

/// Counter displays in `Building::ALL` order.
struct Displays {
    counts: [Option<HtmlElement>; 3],
    // Bound with the other elements but nothing is written to it.
    _log_container: Option<HtmlElement>,
}

struct WidgetInner {
    session: RefCell<AttendanceSession<LeafletSurface>>,
    displays: Displays,
    listeners: RefCell<Vec<Closure<dyn Fn()>>>,
}

/// The attendance map bound to the page: Leaflet map, three building buttons,
/// a clear button and three counter displays.
#[derive(Clone)]
pub struct AttendanceMapWidget {
    inner: Rc<WidgetInner>,
}

impl AttendanceMapWidget {
    /// Build the map and bind the page controls. Only the map container is required.
    pub fn construct(document: &Document, config: &WidgetConfig) -> Result<Self, String> {
        let surface = LeafletSurface::create(config)?;

        let displays = Displays {
            counts: Building::ALL.map(|b| element_or_warn(document, b.display_element_id())),
            _log_container: element_or_warn(document, LOG_CONTAINER_ID),
        };

        let widget = Self {
            inner: Rc::new(WidgetInner {
                session: RefCell::new(AttendanceSession::new(surface)),
                displays,
                listeners: RefCell::new(Vec::new()),
            }),
        };

        for building in Building::ALL {
            if let Some(button) = element_or_warn(document, building.button_element_id()) {
                widget.bind_click(&button, move |w| w.record_attendance(building));
            }
        }
        if let Some(button) = element_or_warn(document, CLEAR_BUTTON_ID) {
            widget.bind_click(&button, |w| w.reset_attendance_logs());
        }

        Ok(widget)
    }

    fn downgrade(&self) -> Weak<WidgetInner> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<WidgetInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn bind_click(&self, button: &HtmlElement, action: impl Fn(&Self) + 'static) {
        let weak = self.downgrade();
        let handler = Closure::<dyn Fn()>::new(move || {
            if let Some(widget) = Self::upgrade(&weak) {
                action(&widget);
            }
        });
        if button
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::warn_1(
                &format!("attendance map: could not bind #{}", button.id()).into(),
            );
        }
        self.inner.listeners.borrow_mut().push(handler);
    }

    /// Route clicks on a placed marker back into the session.
    fn watch_marker_clicks(&self, id: MarkerId) {
        let Some(handle) = self
            .inner
            .session
            .borrow()
            .marker(id)
            .map(|marker| marker.handle.clone())
        else {
            return;
        };

        let weak = self.downgrade();
        let handler = Closure::<dyn Fn()>::new(move || {
            if let Some(widget) = Self::upgrade(&weak) {
                widget.inner.session.borrow_mut().click_marker(id);
            }
        });
        handle.on("click", handler.as_ref().unchecked_ref());
        self.inner.listeners.borrow_mut().push(handler);
    }

    pub fn record_attendance(&self, building: Building) {
        let id = self.inner.session.borrow_mut().record_attendance(building);
        self.watch_marker_clicks(id);
        self.update_log_counts();
    }

    pub fn reset_attendance_logs(&self) {
        self.inner.session.borrow_mut().reset_attendance_logs();
        self.update_log_counts();
    }

    /// Write every building counter into its display element.
    pub fn update_log_counts(&self) {
        let lines = self.inner.session.borrow().log_count_lines();
        for (display, (_, text)) in self.inner.displays.counts.iter().zip(lines) {
            if let Some(el) = display {
                el.set_text_content(Some(&text));
            }
        }
    }

    /// Fetch the marker feed and place one marker per entry. Failures are logged only.
    pub fn load_markers(&self, url: &str) {
        let weak = self.downgrade();
        let url = url.to_string();
        spawn_local(async move {
            let body = match feed::fetch_marker_feed(&url).await {
                Ok(body) => body,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading markers: {e}").into());
                    return;
                }
            };
            let Some(widget) = Self::upgrade(&weak) else {
                return;
            };

            let loaded = widget.inner.session.borrow_mut().load_feed_body(&body);
            match loaded {
                Ok(ids) => {
                    let placed = ids.len();
                    for id in ids {
                        widget.watch_marker_clicks(id);
                    }
                    web_sys::console::info_1(
                        &format!("attendance map: placed {placed} markers from {url}").into(),
                    );
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error loading markers: parse error: {e}").into(),
                    );
                }
            }
        });
    }
}
