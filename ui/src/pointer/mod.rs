//! Document-wide pointer-down events, handed to components as a capability.
//!
//! A component that wants "click outside to dismiss" asks the ambient
//! [`PointerSource`] for a subscription scoped to one region (an element id)
//! and keeps the returned [`PointerSubscription`] alive for as long as it is
//! mounted. Dropping the subscription removes the listener.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

mod tree;
pub use tree::TreePointerSource;

#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
pub use document::DocumentPointerSource;

pub type OutsideHandler = Rc<dyn Fn()>;

pub trait PointerDownSource {
    /// Invoke `on_outside` for every pointer-down landing outside the element
    /// identified by `region`, until the subscription is dropped.
    fn subscribe(&self, region: &str, on_outside: OutsideHandler) -> PointerSubscription;

    /// A pointer-down passed through `region` while bubbling. Sources that
    /// hit-test the DOM themselves ignore this.
    fn mark_inside(&self, _region: &str) {}
}

/// Listener registration; releases the listener when dropped.
#[must_use = "dropping the subscription removes the listener"]
pub struct PointerSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl PointerSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing behind it, used when no listener could be installed.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Context handle to the platform's pointer source.
#[derive(Clone)]
pub struct PointerSource(Rc<dyn PointerDownSource>);

impl PointerSource {
    pub fn new(source: impl PointerDownSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

impl Deref for PointerSource {
    type Target = dyn PointerDownSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Subscribes once when the calling component mounts and unsubscribes when it
/// unmounts. Returns the source so the caller can mark its region.
pub fn use_outside_pointer_down(
    region: &'static str,
    on_outside: impl Fn() + 'static,
) -> Option<PointerSource> {
    let source = try_use_context::<PointerSource>();

    let subscription = use_hook(|| {
        let subscription = match source.as_ref() {
            Some(source) => source.subscribe(region, Rc::new(on_outside)),
            None => {
                warn!(region, "no pointer source in context; outside clicks will not dismiss");
                PointerSubscription::detached()
            }
        };
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    source
}

/// Installs the platform pointer source for everything below it. On the web
/// the source listens on `document` directly.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn PointerRoot(children: Element) -> Element {
    use_context_provider(|| PointerSource::new(DocumentPointerSource));
    rsx! { {children} }
}

/// Installs the platform pointer source for everything below it. Native
/// webviews get the in-tree source, fed by a `mousedown` handler on a wrapper
/// around the page. Presses outside the wrapper (native scrollbars) are not
/// seen; `.pointer-root` is styled to fill the viewport.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn PointerRoot(children: Element) -> Element {
    let tree = use_hook(TreePointerSource::default);
    use_context_provider({
        let tree = tree.clone();
        move || PointerSource::new(tree)
    });

    rsx! {
        div {
            class: "pointer-root",
            onmousedown: move |_| tree.dispatch(),
            {children}
        }
    }
}
