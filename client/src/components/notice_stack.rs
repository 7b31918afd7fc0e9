//! Toast-style notice stack in the page corner.

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticeState};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices">
            {move || {
                notices
                    .read()
                    .items
                    .iter()
                    .map(|notice| {
                        let id = notice.id;
                        let level_class = match notice.level {
                            NoticeLevel::Success => "notices__item--success",
                            NoticeLevel::Error => "notices__item--error",
                            NoticeLevel::Info => "notices__item--info",
                        };
                        let message = notice.message.clone();
                        view! {
                            <div class=format!("notices__item {level_class}")>
                                <span class="notices__message">{message}</span>
                                <button
                                    class="notices__dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
