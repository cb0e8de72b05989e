//! Scoped intersection watcher behind the scroll-reveal animation.
//!
//! ARCHITECTURE
//! ============
//! `WatcherGuard` owns an observer handle from mount to unmount and
//! disconnects it exactly once, either on `release` or on drop. The browser
//! handle (`DomObserver`) feeds a shared `RevealSet` and marks elements
//! `active` on their first qualifying intersection.

#[cfg(test)]
#[path = "reveal_watcher_test.rs"]
mod reveal_watcher_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "hydrate")]
use crate::state::reveal::{ACTIVE_CLASS, IntersectionSample, REVEAL_CLASS, RevealOptions, RevealSet};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("no document available")]
    NoDocument,
    #[error("reveal target query failed: {0}")]
    Query(String),
    #[error("intersection observer creation failed: {0}")]
    Observer(String),
}

/// Host observer that can watch targets and be torn down.
pub trait ObserverHandle {
    type Target;

    fn observe(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

/// Owns an observer handle and disconnects it exactly once.
pub struct WatcherGuard<H: ObserverHandle> {
    handle: Option<H>,
}

impl<H: ObserverHandle> WatcherGuard<H> {
    pub fn acquire(handle: H) -> Self {
        Self { handle: Some(handle) }
    }

    /// Watch `target`. No-op once released.
    pub fn observe(&mut self, target: &H::Target) {
        if let Some(handle) = self.handle.as_mut() {
            handle.observe(target);
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
    }
}

impl<H: ObserverHandle> Drop for WatcherGuard<H> {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// BROWSER OBSERVER
// =============================================================================

#[cfg(feature = "hydrate")]
type IntersectCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// `IntersectionObserver` plus the callback it must outlive.
#[cfg(feature = "hydrate")]
pub struct DomObserver {
    observer: web_sys::IntersectionObserver,
    state: Rc<RefCell<RevealSet<usize>>>,
    _on_intersect: IntersectCallback,
}

#[cfg(feature = "hydrate")]
impl ObserverHandle for DomObserver {
    type Target = web_sys::Element;

    fn observe(&mut self, target: &web_sys::Element) {
        self.observer.observe(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
        self.state.borrow_mut().disconnect();
    }
}

/// Watch every element matching `selector` until the guard is released.
///
/// # Errors
///
/// Fails when there is no document, the selector is invalid, or the browser
/// refuses to build the observer. Zero matches is not an error.
#[cfg(feature = "hydrate")]
pub fn attach(selector: &str, options: RevealOptions) -> Result<WatcherGuard<DomObserver>, RevealError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(RevealError::NoDocument)?;
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| RevealError::Query(format!("{e:?}")))?;
    let elements: Rc<Vec<web_sys::Element>> = Rc::new(
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| match node.dyn_into::<web_sys::Element>() {
                Ok(el) => Some(el),
                Err(_) => None,
            })
            .collect(),
    );

    let state = Rc::new(RefCell::new(RevealSet::new(options)));
    let on_intersect = intersect_callback(Rc::clone(&state), Rc::clone(&elements));

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer = web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
        .map_err(|e| RevealError::Observer(format!("{e:?}")))?;

    let mut guard = WatcherGuard::acquire(DomObserver { observer, state: Rc::clone(&state), _on_intersect: on_intersect });
    for (index, el) in elements.iter().enumerate() {
        state.borrow_mut().observe(index);
        guard.observe(el);
    }
    log::debug!("scroll reveal watching {} elements", elements.len());
    Ok(guard)
}

#[cfg(feature = "hydrate")]
fn intersect_callback(state: Rc<RefCell<RevealSet<usize>>>, elements: Rc<Vec<web_sys::Element>>) -> IntersectCallback {
    Closure::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = elements.iter().position(|el| *el == target) else {
                continue;
            };
            let sample = IntersectionSample { is_intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() };
            if !state.borrow_mut().record(&index, sample) {
                continue;
            }
            if let Err(e) = target.class_list().add_1(ACTIVE_CLASS) {
                log::warn!("reveal class update failed: {e:?}");
            }
            // Revealed elements never revert, so stop watching them.
            observer.unobserve(&target);
        }
    })
}

/// Attach the reveal watcher after mount and release it on unmount.
pub fn use_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    {
        let watcher = StoredValue::new_local(None::<WatcherGuard<DomObserver>>);

        Effect::new(move || match attach(&format!(".{REVEAL_CLASS}"), RevealOptions::default()) {
            Ok(guard) => watcher.set_value(Some(guard)),
            Err(e) => log::warn!("scroll reveal disabled: {e}"),
        });

        on_cleanup(move || {
            if let Some(mut guard) = watcher.try_update_value(Option::take).flatten() {
                guard.release();
            }
        });
    }
}
