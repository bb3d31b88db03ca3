use dioxus::logger::tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};

use super::{OutsideHandler, PointerDownSource, PointerSubscription};

const POINTER_DOWN: &str = "mousedown";

/// Listens for `mousedown` on the browser `document` and hit-tests the region
/// element by id.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentPointerSource;

impl PointerDownSource for DocumentPointerSource {
    fn subscribe(&self, region: &str, on_outside: OutsideHandler) -> PointerSubscription {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            warn!(region, "no document available; pointer listener not installed");
            return PointerSubscription::detached();
        };

        let region_id = region.to_string();
        let lookup = document.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            // Region not rendered: nothing to dismiss.
            let Some(element) = lookup.get_element_by_id(&region_id) else {
                return;
            };
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            if !element.contains(target.as_ref()) {
                on_outside();
            }
        });

        if let Err(err) = document
            .add_event_listener_with_callback(POINTER_DOWN, listener.as_ref().unchecked_ref())
        {
            warn!(region, ?err, "failed to install pointer listener");
            return PointerSubscription::detached();
        }

        PointerSubscription::new(move || {
            if let Err(err) = document
                .remove_event_listener_with_callback(POINTER_DOWN, listener.as_ref().unchecked_ref())
            {
                warn!(?err, "failed to remove pointer listener");
            }
        })
    }
}
