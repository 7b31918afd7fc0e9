//! Custom domain tab: collect a domain, show DNS instructions, confirm.
//!
//! Pure form/IO glue around the domain collaborator; the sync core is not
//! involved. Hidden entirely while a deployment is in progress.

use leptos::prelude::*;

use crate::net::api;
use crate::state::notices::NoticeLevel;
use crate::sync::EffectContext;

/// A record the user must add before confirming the domain connection.
const DNS_RECORD_VALUE: &str = "184.164.80.42";

#[component]
pub fn DomainPanel() -> impl IntoView {
    let cx = expect_context::<EffectContext>();

    let domain = RwSignal::new(String::new());
    let show_instructions = RwSignal::new(false);
    let connecting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !domain.get_untracked().trim().is_empty() {
            show_instructions.set(true);
        }
    };

    let on_confirm = {
        let cx = cx.clone();
        move |_| {
            if connecting.get_untracked() {
                return;
            }
            connecting.set(true);
            let cx = cx.clone();
            let name = domain.get_untracked();
            leptos::task::spawn_local(async move {
                match api::connect_custom_domain(&cx.project_id, &name).await {
                    Ok(()) => {
                        cx.notices.update(|n| {
                            n.push(
                                NoticeLevel::Success,
                                format!(
                                    "{name} is being connected — this can take up to 24 hours"
                                ),
                            );
                        });
                    }
                    Err(e) => {
                        cx.notices.update(|n| {
                            n.push(
                                NoticeLevel::Error,
                                format!("Failed to connect custom domain: {e}"),
                            );
                        });
                    }
                }
                connecting.set(false);
            });
        }
    };

    view! {
        <div class="domain">
            <p class="domain__intro">
                "Serve your site from a domain you own instead of the shared address."
            </p>
            {move || {
                if show_instructions.get() {
                    view! {
                        <div class="domain__instructions">
                            <h3>"DNS configuration"</h3>
                            <p>"Add the following A record to your domain's DNS settings:"</p>
                            <dl class="domain__record">
                                <dt>"Type"</dt><dd>"A"</dd>
                                <dt>"Name"</dt><dd>"@ or your subdomain"</dd>
                                <dt>"Value"</dt><dd>{DNS_RECORD_VALUE}</dd>
                            </dl>
                            <button
                                class="domain__confirm"
                                disabled=move || connecting.get()
                                on:click=on_confirm.clone()
                            >
                                {move || {
                                    if connecting.get() { "Connecting..." } else { "Confirm DNS settings" }
                                }}
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <form class="domain__form" on:submit=on_submit>
                            <input
                                class="domain__input"
                                type="text"
                                placeholder="e.g. hello.yourdomain.com"
                                prop:value=move || domain.get()
                                on:input=move |ev| domain.set(event_target_value(&ev))
                            />
                            <button
                                class="domain__connect"
                                type="submit"
                                disabled=move || domain.get().trim().is_empty()
                            >
                                "Connect"
                            </button>
                        </form>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
