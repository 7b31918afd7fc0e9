//! Code tab: raw markup editor with explicit save.
//!
//! Edits are synchronous local mutations (dirty tracking only); nothing is
//! persisted until the user saves. Save is disabled while any remote
//! mutation is outstanding so the user cannot save over a document that is
//! about to be replaced.

use leptos::prelude::*;

use crate::net::api;
use crate::state::notices::NoticeLevel;
use crate::state::ui::UiState;
use crate::sync::EffectContext;
use crate::sync::engine::{EditorSync, MutationRequest};

#[component]
pub fn EditorPanel() -> impl IntoView {
    let sync = expect_context::<RwSignal<EditorSync>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let cx = expect_context::<EffectContext>();

    let loading = move || sync.read().document.loading;
    let unsaved = move || sync.read().document.dirty;
    let save_disabled = move || {
        let state = sync.read();
        ui.read().saving || state.busy.any() || state.document.loading
    };

    let on_input = {
        let cx = cx.clone();
        move |ev| {
            let text = event_target_value(&ev);
            let effects = sync
                .try_update(|s| s.dispatch(MutationRequest::LocalEdit { text }))
                .unwrap_or_default();
            crate::sync::apply_effects(effects, &cx);
        }
    };

    let on_save = {
        let cx = cx.clone();
        move |_| {
            if save_disabled() {
                return;
            }
            let content = sync.read_untracked().document.content.clone();
            let cx = cx.clone();
            ui.update(|u| u.saving = true);
            leptos::task::spawn_local(async move {
                match api::write_site_file(&cx.project_id, &content).await {
                    Ok(()) => {
                        cx.sync.update(|s| s.document.mark_saved());
                        cx.preview.update(|p| p.request_reload());
                        cx.notices.update(|n| {
                            n.push(
                                NoticeLevel::Success,
                                "index.html updated — your changes are live",
                            );
                        });
                    }
                    Err(e) => {
                        cx.notices.update(|n| {
                            n.push(NoticeLevel::Error, format!("Save failed: {e}"));
                        });
                    }
                }
                ui.update(|u| u.saving = false);
            });
        }
    };

    view! {
        <div class="editor">
            <div class="editor__header">
                <span class="editor__filename">"index.html"</span>
                {move || {
                    unsaved().then(|| view! {
                        <span class="editor__badge">"Unsaved changes"</span>
                    })
                }}
                <button
                    class="editor__save"
                    disabled=save_disabled
                    on:click=on_save
                >
                    {move || if ui.read().saving { "Saving..." } else { "Save" }}
                </button>
            </div>
            {move || {
                if loading() {
                    view! { <div class="editor__loading">"Loading index.html..."</div> }
                        .into_any()
                } else {
                    view! {
                        <textarea
                            class="editor__textarea"
                            spellcheck="false"
                            prop:value=move || sync.read().document.content.clone()
                            on:input=on_input.clone()
                        ></textarea>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
