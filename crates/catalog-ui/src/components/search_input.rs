//! Debounced search input for the catalog header.
//!
//! # Design
//! - Echo every keystroke immediately through `on_input`.
//! - Emit `on_search` once the input has been quiet for `debounce_ms`; each keystroke
//!   replaces the pending timer.

use crate::core::debounce::Debouncer;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(500)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let debounce = props.debounce_ms;
    let debouncer = use_mut_ref(Debouncer::<Timeout>::default);

    {
        let debouncer = debouncer.clone();
        use_effect_with_deps(
            move |_| move || debouncer.borrow_mut().cancel(),
            (),
        );
    }

    let oninput = {
        let on_input = props.on_input.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |next: String| {
            on_input.emit(next.clone());
            if debounce == 0 {
                on_search.emit(next);
                return;
            }
            let weak = Rc::downgrade(&debouncer);
            let on_search = on_search.clone();
            debouncer.borrow_mut().schedule(move |generation| {
                Timeout::new(debounce, move || {
                    let Some(debouncer) = weak.upgrade() else {
                        return;
                    };
                    if debouncer.borrow_mut().fire(generation) {
                        on_search.emit(next);
                    }
                })
            });
        })
    };

    html! {
        <input
            class="search-input"
            type="search"
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            aria-label="Search products"
            oninput={Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                    oninput.emit(input.value());
                }
            })}
        />
    }
}
