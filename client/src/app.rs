//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{edit::EditPage, home::HomePage};
use crate::state::assets::AssetsState;
use crate::state::chat::ChatState;
use crate::state::notices::NoticeState;
use crate::state::ui::UiState;
use crate::sync::engine::EditorSync;
use crate::sync::preview::PreviewState;

/// Sender half of the channel client, stored in context so any surface can
/// queue outbound envelopes. Defaults to disconnected; the edit page swaps
/// in a connected sender once the channel client is spawned.
#[derive(Clone, Default)]
pub struct EnvelopeSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<Vec<u8>>>,
}

impl EnvelopeSender {
    /// Wrap the channel client's outbound byte channel.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Encode and queue an envelope.
    ///
    /// Returns `false` when there is no active connection; the channel
    /// client reconnects on its own and the user simply retries.
    pub fn send(&self, envelope: &wire::Envelope) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let bytes = wire::encode_envelope(envelope);
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(bytes).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = envelope;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Every piece of page state lives in an `RwSignal` provided here — never
/// in module-level globals — so editing sessions are isolated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sync = RwSignal::new(EditorSync::default());
    let preview = RwSignal::new(PreviewState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let assets = RwSignal::new(AssetsState::default());
    let notices = RwSignal::new(NoticeState::default());
    let sender = RwSignal::new(EnvelopeSender::default());

    provide_context(sync);
    provide_context(preview);
    provide_context(ui);
    provide_context(chat);
    provide_context(assets);
    provide_context(notices);
    provide_context(sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/shipwright.css"/>
        <Title text="Shipwright"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditPage/>
            </Routes>
        </Router>
    }
}
