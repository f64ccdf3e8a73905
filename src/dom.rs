//! Browser `IntersectionObserver` behind the core's backend seam.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use portfolio_core::prelude::*;
use portfolio_core::{
    IntersectionBackend, IntersectionReport, ReportSink, RevealLatch, SectionId, Subscription,
    ViewingBand,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer plus the JS callback it calls into.
///
/// The callback must outlive the observer, so both live here and the
/// observer is disconnected before the callback is freed.
pub struct DomSubscription {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Subscription for DomSubscription {
    fn disconnect(self) {
        // Drop does the work
    }
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Looks sections up in the live document.
pub struct DomBackend {
    window: Option<Window>,
    document: Option<Document>,
}

impl Default for DomBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DomBackend {
    pub fn new() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        if document.is_none() {
            warn!("No document available, section tracking disabled");
        }
        Self { window, document }
    }
}

impl IntersectionBackend for DomBackend {
    type Target = Element;
    type Subscription = DomSubscription;

    fn find_section(&self, id: SectionId) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(id.as_str())
    }

    fn observe(
        &mut self,
        section: SectionId,
        target: Element,
        band: &ViewingBand,
        sink: ReportSink,
    ) -> Result<DomSubscription> {
        let window = self.window.clone();
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                // Document offsets stay comparable across batches fired at
                // different scroll positions
                let scroll_y = window
                    .as_ref()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                let reports: Vec<IntersectionReport> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionReport {
                        section,
                        is_intersecting: entry.is_intersecting(),
                        top: entry.bounding_client_rect().top() + scroll_y,
                    })
                    .collect();
                sink(&reports);
            });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin());
        options.set_threshold(&JsValue::from_f64(band.threshold));

        let observer =
            new_observer(&callback, &options).map_err(|e| Error::observer(section, e))?;
        observer.observe(&target);

        Ok(DomSubscription {
            observer,
            _callback: callback,
        })
    }
}

/// Watches `target` until it first enters the viewport, then calls
/// `on_visible` once and stops observing.
pub fn observe_reveal(
    target: &Element,
    on_visible: impl FnOnce() + 'static,
) -> Result<DomSubscription> {
    let mut latch = RevealLatch::default();
    let mut on_visible = Some(on_visible);

    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.record(visible) {
                observer.disconnect();
                if let Some(f) = on_visible.take() {
                    f();
                }
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.0));

    let target_name = match target.id() {
        id if id.is_empty() => target.tag_name().to_lowercase(),
        id => id,
    };
    let observer =
        new_observer(&callback, &options).map_err(|e| Error::observer(target_name, e))?;
    observer.observe(target);

    Ok(DomSubscription {
        observer,
        _callback: callback,
    })
}

fn new_observer(
    callback: &ObserverCallback,
    options: &IntersectionObserverInit,
) -> std::result::Result<IntersectionObserver, String> {
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
        .map_err(|e| format!("{e:?}"))
}
