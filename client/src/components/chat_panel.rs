//! AI chat surface: prompts out, rewritten documents back via the channel.
//!
//! The chat collaborator does the AI work server-side; this panel only
//! claims the chat busy slot, hands the prompt over, and records the
//! transcript. It stays available during deployment, but document mutation
//! is gated by the engine's deployment mask.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api;
use crate::net::types::{ChannelEvent, MutationOutcome};
use crate::state::assets::AssetsState;
use crate::state::chat::ChatState;
use crate::sync::EffectContext;
use crate::sync::engine::{EditorSync, MutationRequest};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let sync = expect_context::<RwSignal<EditorSync>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let assets = expect_context::<RwSignal<AssetsState>>();
    let cx = expect_context::<EffectContext>();

    // A prompt handed over from onboarding (?prompt=...), shown once.
    let query = use_query_map();
    let input = RwSignal::new(query.read_untracked().get("prompt").unwrap_or_default());

    let thinking = move || sync.read().busy.chat;
    let send_disabled = move || thinking() || sync.read().deployment.deploying();

    let do_send = {
        let cx = cx.clone();
        move || {
            let prompt = input.get_untracked();
            if prompt.trim().is_empty() || send_disabled() {
                return;
            }

            // Claim the chat slot; the engine rejects duplicates and the
            // deployment mask silently.
            let effects = sync
                .try_update(|s| s.dispatch(MutationRequest::ChatUpdate))
                .unwrap_or_default();
            crate::sync::apply_effects(effects, &cx);
            if !sync.read_untracked().busy.chat {
                return;
            }

            chat.update(|c| c.push_user(prompt.clone()));
            input.set(String::new());

            let cx = cx.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = api::send_chat_prompt(&cx.project_id, &prompt).await {
                    // The request never started; release the slot and report
                    // through the engine so the failure surfaces once.
                    chat.update(|c| {
                        c.push_status("assistant", "I couldn't reach the AI service. Please try again.");
                    });
                    let effects = cx
                        .sync
                        .try_update(|s| {
                            s.handle_event(ChannelEvent::ChatResult(MutationOutcome {
                                success: false,
                                content: None,
                                message: Some(format!("Could not reach the AI service: {e}")),
                            }))
                        })
                        .unwrap_or_default();
                    crate::sync::apply_effects(effects, &cx);
                }
            });
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };
    let on_keydown = {
        let do_send = do_send.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                do_send();
            }
        }
    };

    view! {
        <div class="chat">
            <div class="chat__messages">
                {move || {
                    chat.read()
                        .messages
                        .iter()
                        .map(|msg| {
                            let role = msg.role.clone();
                            let content = msg.content.clone();
                            let is_user = role == "user";
                            view! {
                                <div class="chat__message" class:chat__message--user=is_user>
                                    <span class="chat__role">{role}</span>
                                    <div class="chat__content">{content}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    thinking().then(|| view! {
                        <div class="chat__thinking">"Rewriting your site..."</div>
                    })
                }}
            </div>
            {move || {
                (assets.read().count() > 0).then(|| view! {
                    <div class="chat__assets-hint">
                        {format!("{} attachment(s) available to the AI", assets.read().count())}
                    </div>
                })
            }}
            <div class="chat__input-row">
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Describe the change you want..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="chat__send" disabled=send_disabled on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
