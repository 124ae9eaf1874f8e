//! Login gate shown while no session is held.
//!
//! # Design
//! - Fields start with the demo account so the catalog is one click away.
//! - Field validation and the request itself both go through the controller, which
//!   records any failure in the shared store for the error banner.

use crate::app::CatalogCtx;
use crate::core::auth::Credentials;
use crate::core::store::AppStore;
use tracing::debug;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(LoginForm)]
pub(crate) fn login_form() -> Html {
    let ctx = use_context::<CatalogCtx>();
    let credentials = use_state(Credentials::demo);
    let busy = use_selector(|store: &AppStore| store.session.login_busy);
    let error = use_selector(|store: &AppStore| store.catalog.error.clone());

    let on_username = {
        let credentials = credentials.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                credentials.set(Credentials {
                    username: input.value(),
                    ..(*credentials).clone()
                });
            }
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                credentials.set(Credentials {
                    password: input.value(),
                    ..(*credentials).clone()
                });
            }
        })
    };

    let onsubmit = {
        let credentials = credentials.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = ctx.clone() else {
                return;
            };
            let submitted = (*credentials).clone();
            yew::platform::spawn_local(async move {
                if let Err(err) = ctx.controller.login(submitted).await {
                    debug!(error = %err, "login attempt rejected");
                }
            });
        })
    };

    html! {
        <section class="login-container">
            <h2>{"Login"}</h2>
            {(*error).as_ref().map(|message| html! {
                <p class="error-message" role="alert">{message.clone()}</p>
            }).unwrap_or_default()}
            <form class="login-form" {onsubmit}>
                <label class="stack">
                    <span>{"Username"}</span>
                    <input
                        type="text"
                        autocomplete="username"
                        value={credentials.username.clone()}
                        oninput={on_username}
                    />
                </label>
                <label class="stack">
                    <span>{"Password"}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        value={credentials.password.clone()}
                        oninput={on_password}
                    />
                </label>
                <button type="submit" class="solid" disabled={*busy}>
                    {if *busy { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </section>
    }
}
