mod feed;
mod leaflet;
mod page;
mod widget;

use std::cell::RefCell;

use crate::widget::AttendanceMapWidget;

thread_local! {
    static WIDGET: RefCell<Option<AttendanceMapWidget>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let ready_document = document.clone();
    page::on_dom_ready(&document, move || start(&ready_document));
}

/// Single startup path: build the widget, paint the counters, load the feed once.
fn start(document: &web_sys::Document) {
    WIDGET.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }

        let config = page::read_config(document);
        let widget = match AttendanceMapWidget::construct(document, &config) {
            Ok(widget) => widget,
            Err(e) => {
                web_sys::console::error_1(&format!("attendance map: {e}").into());
                return;
            }
        };

        widget.update_log_counts();
        widget.load_markers(&config.feed_url);
        web_sys::console::info_1(
            &format!(
                "attendance map ready at {}, {} (zoom {})",
                config.center.lat, config.center.lon, config.zoom
            )
            .into(),
        );
        *slot.borrow_mut() = Some(widget);
    });
}
