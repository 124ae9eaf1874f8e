//! Invisible marker below the grid that requests the next page when scrolled into view.
//!
//! # Design
//! - The observer is rebuilt whenever `enabled` flips, so a sentinel that is still on
//!   screen after a page lands reports again and keeps the list filling.
//! - The parent disables it while a request is in flight or an error is shown.
//! - Observation stops on unmount; the parent only renders the sentinel while more pages
//!   remain.

use crate::core::scroll::sentinel_fired;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ScrollSentinelProps {
    /// Visibility ratio that counts as "seen".
    pub threshold: f64,
    /// Observe only while this is set.
    pub enabled: bool,
    pub on_visible: Callback<()>,
}

#[function_component(ScrollSentinel)]
pub(crate) fn scroll_sentinel(props: &ScrollSentinelProps) -> Html {
    let node = use_node_ref();
    let on_visible = use_mut_ref(|| props.on_visible.clone());
    *on_visible.borrow_mut() = props.on_visible.clone();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |(enabled, threshold): &(bool, f64)| {
                let observation = if *enabled {
                    observe(&node, *threshold, on_visible)
                } else {
                    None
                };
                move || {
                    if let Some((observer, _handler)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (props.enabled, props.threshold),
        );
    }

    html! {
        <div ref={node} class="scroll-sentinel" aria-hidden="true"></div>
    }
}

type ObserverHandler = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe(
    node: &NodeRef,
    threshold: f64,
    on_visible: Rc<RefCell<Callback<()>>>,
) -> Option<(IntersectionObserver, ObserverHandler)> {
    let element = node.cast::<web_sys::Element>()?;
    let handler = ObserverHandler::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let fired = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .is_ok_and(|entry| sentinel_fired(entry.intersection_ratio(), threshold))
            });
            if fired {
                let callback = on_visible.borrow().clone();
                callback.emit(());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);
    Some((observer, handler))
}
