//! Live preview of the persisted document.
//!
//! The iframe source is keyed on the reload epoch, so every accepted remote
//! mutation or save forces a fresh fetch. A blocking overlay covers the
//! surface while any mutation is outstanding so the user never reads a
//! preview mid-replacement.

use leptos::prelude::*;

use crate::net::api;
use crate::sync::EffectContext;
use crate::sync::engine::EditorSync;
use crate::sync::preview::{PreviewState, ViewMode};

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let sync = expect_context::<RwSignal<EditorSync>>();
    let preview = expect_context::<RwSignal<PreviewState>>();
    let cx = expect_context::<EffectContext>();

    let src = {
        let cx = cx.clone();
        move || api::preview_url(&cx.project_id, preview.read().reload_epoch)
    };
    let busy = move || sync.read().overlay_busy();
    let mobile = move || preview.read().view == ViewMode::Mobile;

    view! {
        <div class="preview" class:preview--mobile=mobile>
            {move || {
                mobile().then(|| view! {
                    <div class="preview__device-bar">
                        <span class="preview__device-name">{move || preview.read().device()}</span>
                        <button
                            class="preview__device-shuffle"
                            on:click=move |_| preview.update(PreviewState::cycle_device)
                        >
                            "Next device"
                        </button>
                    </div>
                })
            }}
            <iframe class="preview__frame" title="Site preview" src=src.clone()></iframe>
            {move || {
                busy().then(|| view! {
                    <div class="preview__overlay">
                        <div class="preview__spinner"></div>
                    </div>
                })
            }}
            {move || {
                preview.read().celebrating.then(|| view! {
                    <div class="preview__celebration">"\u{1f389} Your website is live!"</div>
                })
            }}
        </div>
    }
}
