//! Viewport hooks: breakpoint and element visibility

use leptos::html;
use leptos::prelude::*;

/// Widths below this are laid out as mobile, in px
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Tracks the mobile media query. Always `false` while rendering on the
/// server; hydration flips it on the first effect run.
pub fn use_is_mobile() -> ReadSignal<bool> {
    let (is_mobile, set_is_mobile) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let query = format!("(max-width: {}px)", MOBILE_BREAKPOINT - 1);
            let Some(list) = web_sys::window().and_then(|w| w.match_media(&query).ok().flatten())
            else {
                return;
            };
            set_is_mobile.set(list.matches());

            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| set_is_mobile.set(e.matches()),
            );
            let _ = list.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
            // Keep the closure alive
            handler.forget();
        });
    }
    #[cfg(feature = "ssr")]
    let _ = set_is_mobile;

    is_mobile
}

/// Whether at least `amount` (0..=1) of `target` is inside the viewport.
/// Not latching: the signal drops back to `false` when the element leaves.
pub fn use_in_view(target: NodeRef<html::Div>, amount: f64) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };

            let callback = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                        // ratios at the threshold are reported with float error
                        let visible =
                            entry.is_intersecting() && entry.intersection_ratio() >= amount - 1e-3;
                        set_in_view.set(visible);
                    }
                }
            });

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(amount));
            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer.observe(&element),
                Err(err) => leptos::logging::warn!("visibility observer unavailable: {err:?}"),
            }
            callback.forget();
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (target, amount, set_in_view);

    in_view
}
