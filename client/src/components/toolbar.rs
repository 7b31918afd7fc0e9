//! Top toolbar: history navigation, viewport switching, export, live site.
//!
//! Everything except the page title is an editing-surface control and is
//! hidden while a deployment is in progress.

use leptos::prelude::*;

use crate::net::api;
use crate::sync::EffectContext;
use crate::sync::engine::{EditorSync, MutationRequest};
use crate::sync::preview::{PreviewState, ViewMode};

fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let sync = expect_context::<RwSignal<EditorSync>>();
    let preview = expect_context::<RwSignal<PreviewState>>();
    let cx = expect_context::<EffectContext>();

    let deploying = move || sync.read().deployment.deploying();

    let dispatch = {
        let cx = cx.clone();
        move |request: MutationRequest| {
            let effects = sync
                .try_update(|s| s.dispatch(request))
                .unwrap_or_default();
            crate::sync::apply_effects(effects, &cx);
        }
    };
    let on_undo = {
        let dispatch = dispatch.clone();
        move |_| dispatch(MutationRequest::Undo)
    };
    let on_redo = {
        let dispatch = dispatch.clone();
        move |_| dispatch(MutationRequest::Redo)
    };

    let view_button = move |mode: ViewMode, label: &'static str| {
        let active = move || preview.read().view == mode;
        view! {
            <button
                class="toolbar__view-option"
                class:toolbar__view-option--active=active
                on:click=move |_| preview.update(|p| p.set_view(mode))
            >
                {label}
            </button>
        }
    };

    let on_export = {
        let cx = cx.clone();
        move |_| {
            open_in_new_tab(&api::export_url(&cx.project_id));
            cx.notices.update(|n| {
                n.push(
                    crate::state::notices::NoticeLevel::Info,
                    "Your project will be downloaded shortly!",
                );
            });
        }
    };
    let on_open_live = {
        let cx = cx.clone();
        move |_| {
            let epoch = preview.read_untracked().reload_epoch;
            open_in_new_tab(&api::preview_url(&cx.project_id, epoch));
        }
    };

    view! {
        <header class="toolbar">
            <div class="toolbar__lead">
                {move || {
                    (!deploying()).then(|| view! {
                        <a class="toolbar__back" href="/">"\u{2039} Back"</a>
                    })
                }}
                <h1 class="toolbar__title">"Customise your site"</h1>
            </div>
            {move || {
                (!deploying()).then(|| view! {
                    <div class="toolbar__actions">
                        <button class="toolbar__button" on:click=on_undo.clone()>"Undo"</button>
                        <button class="toolbar__button" on:click=on_redo.clone()>"Redo"</button>
                        <span class="toolbar__views">
                            {view_button(ViewMode::Horizontal, "Split")}
                            {view_button(ViewMode::Mobile, "Mobile")}
                            {view_button(ViewMode::Fullscreen, "Fullscreen")}
                        </span>
                        <button class="toolbar__button" on:click=on_export.clone()>
                            "Export Project"
                        </button>
                        <button class="toolbar__button toolbar__button--primary" on:click=on_open_live.clone()>
                            "Preview Live Site"
                        </button>
                    </div>
                })
            }}
        </header>
    }
}
