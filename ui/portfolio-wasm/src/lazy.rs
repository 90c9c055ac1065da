//! Lazy image loading through `IntersectionObserver`.

use crate::dom::Elements;
use crate::state;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

fn observer_supported() -> bool {
    js_sys::Reflect::has(&crate::dom::window(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

/// Observe every `img[data-src]`; swap the staged source in on first
/// intersection and stop observing that image.
pub fn observe_images(els: &Elements) {
    if els.lazy_images.is_empty() || !observer_supported() {
        return;
    }

    // Same order as `UiState::lazy`, which was seeded from this list.
    let images: Vec<Element> = els.lazy_images.clone();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = images.iter().position(|img| *img == target) else {
                    continue;
                };
                let (src, done) = state::with_mut(|s| {
                    let src = s.lazy.intersect(index, entry.is_intersecting());
                    (src, s.lazy.is_done(index))
                });
                if let Some(src) = src {
                    let _ = target.set_attribute("src", &src);
                    let _ = target.remove_attribute("data-src");
                }
                if done {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let Ok(observer) = IntersectionObserver::new(cb.as_ref().unchecked_ref()) else {
        return;
    };
    cb.forget();

    for img in &els.lazy_images {
        observer.observe(img);
    }
}
