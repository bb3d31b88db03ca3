use std::cell::RefCell;
use std::rc::Rc;

use super::{OutsideHandler, PointerDownSource, PointerSubscription};

/// Pointer source driven from inside the component tree.
///
/// Regions call [`PointerDownSource::mark_inside`] from their own
/// `onmousedown`; the root handler then calls [`TreePointerSource::dispatch`]
/// once the event has bubbled all the way up.
#[derive(Clone, Default)]
pub struct TreePointerSource {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    listeners: Vec<Listener>,
    inside: Vec<String>,
}

struct Listener {
    id: u64,
    region: String,
    on_outside: OutsideHandler,
}

impl TreePointerSource {
    /// Finish one pointer-down: notify every listener whose region was not marked.
    pub fn dispatch(&self) {
        let handlers: Vec<OutsideHandler> = {
            let mut inner = self.inner.borrow_mut();
            let inside = std::mem::take(&mut inner.inside);
            inner
                .listeners
                .iter()
                .filter(|listener| !inside.contains(&listener.region))
                .map(|listener| listener.on_outside.clone())
                .collect()
        };

        // Borrow released: handlers may subscribe or unsubscribe.
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl PointerDownSource for TreePointerSource {
    fn subscribe(&self, region: &str, on_outside: OutsideHandler) -> PointerSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push(Listener {
                id,
                region: region.to_string(),
                on_outside,
            });
            id
        };

        let inner = Rc::downgrade(&self.inner);
        PointerSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|listener| listener.id != id);
            }
        })
    }

    fn mark_inside(&self, region: &str) {
        self.inner.borrow_mut().inside.push(region.to_string());
    }
}
