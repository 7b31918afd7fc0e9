//! Edit page — the document workspace.
//!
//! Composes the toolbar, the tabbed editing panel (chat / code / domain),
//! and the live preview. This is the page-level controller that owns the
//! sync engine's effect context: it brings up the channel client, performs
//! the initial document load, and reloads document + assets when a
//! deployment finishes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::EnvelopeSender;
use crate::components::chat_panel::ChatPanel;
use crate::components::domain_panel::DomainPanel;
use crate::components::editor_panel::EditorPanel;
use crate::components::notice_stack::NoticeStack;
use crate::components::preview_panel::PreviewPanel;
use crate::components::toolbar::Toolbar;
use crate::net::api;
use crate::state::assets::AssetsState;
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::ui::{EditorTab, UiState};
use crate::sync::EffectContext;
use crate::sync::engine::EditorSync;
use crate::sync::preview::{PreviewState, ViewMode};

#[component]
pub fn EditPage() -> impl IntoView {
    let sync = expect_context::<RwSignal<EditorSync>>();
    let preview = expect_context::<RwSignal<PreviewState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let assets = expect_context::<RwSignal<AssetsState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let sender = expect_context::<RwSignal<EnvelopeSender>>();

    let params = use_params_map();
    let project_id = params.read_untracked().get("id").unwrap_or_default();

    let cx = EffectContext {
        project_id: project_id.clone(),
        sync,
        preview,
        notices,
        sender,
    };
    provide_context(cx.clone());

    // Bring the channel up for this project's session (browser only).
    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::channel_client::spawn_channel_client(cx.clone());
        sender.set(EnvelopeSender::connected(tx));
    }

    // Initial load of document and assets, deferred while a deployment is
    // in progress and repeated once the deployment finishes. The returned
    // bool is the "loaded while idle" marker threaded between runs.
    {
        let project_id = project_id.clone();
        Effect::new(move |prev: Option<bool>| {
            if sync.read().deployment.deploying() {
                return false;
            }
            if prev == Some(true) {
                return true;
            }

            sync.update(|s| s.document.begin_load());
            let id = project_id.clone();
            leptos::task::spawn_local(async move {
                match api::read_site_file(&id).await {
                    Ok(content) => sync.update(|s| s.document.finish_load(content)),
                    Err(e) => {
                        sync.update(|s| s.document.fail_load());
                        notices.update(|n| {
                            n.push(
                                NoticeLevel::Error,
                                format!("Failed to load index.html: {e}"),
                            );
                        });
                    }
                }
            });

            let id = project_id.clone();
            leptos::task::spawn_local(async move {
                // Failure here is non-fatal: the badge just shows nothing.
                let items = api::fetch_assets(&id).await.unwrap_or_default();
                assets.update(|a| a.replace(items));
            });

            true
        });
    }

    // The deployment gate hides the code/domain surfaces; if one of them is
    // active when the gate closes, fall back to the chat tab.
    Effect::new(move || {
        let deploying = sync.read().deployment.deploying();
        if deploying && !ui.read_untracked().active_tab.available_while_deploying() {
            ui.update(|u| u.active_tab = EditorTab::Chat);
        }
    });

    let deploying = move || sync.read().deployment.deploying();
    let active_tab = move || ui.read().active_tab;
    let tab_button = move |tab: EditorTab, label: &'static str| {
        let selected = move || active_tab() == tab;
        view! {
            <button
                class="edit-page__tab"
                class:edit-page__tab--active=selected
                on:click=move |_| ui.update(|u| u.active_tab = tab)
            >
                {label}
                {move || {
                    (tab == EditorTab::Domain && assets.read().count() > 0)
                        .then(|| view! {
                            <span class="edit-page__badge">{assets.read().count()}</span>
                        })
                }}
            </button>
        }
    };

    view! {
        <div class="edit-page">
            <NoticeStack/>
            <Toolbar/>
            <div class="edit-page__body">
                {move || {
                    (preview.read().view != ViewMode::Fullscreen).then(|| view! {
                        <section class="edit-page__panel">
                            <div class="edit-page__tabs">
                                {tab_button(EditorTab::Chat, "AI Chat")}
                                {move || {
                                    (!deploying()).then(|| view! {
                                        {tab_button(EditorTab::Code, "Code")}
                                        {tab_button(EditorTab::Domain, "Custom Domain")}
                                    })
                                }}
                            </div>
                            <div class="edit-page__tab-content">
                                {move || match ui.read().active_tab {
                                    EditorTab::Chat => view! { <ChatPanel/> }.into_any(),
                                    EditorTab::Code => view! { <EditorPanel/> }.into_any(),
                                    EditorTab::Domain => view! { <DomainPanel/> }.into_any(),
                                }}
                            </div>
                        </section>
                    })
                }}
                <section class="edit-page__preview">
                    <PreviewPanel/>
                </section>
            </div>
        </div>
    }
}
