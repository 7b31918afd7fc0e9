//! WebSocket channel client for the realtime envelope protocol.
//!
//! The channel client manages the WebSocket lifecycle: ticket auth,
//! connection, reconnection with exponential backoff, and envelope dispatch
//! into the sync engine. It is the only place where raw bytes meet the typed
//! [`ChannelEvent`] layer.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(feature = "hydrate")]
use crate::net::types::ChannelEvent;
#[cfg(feature = "hydrate")]
use crate::sync::EffectContext;
#[cfg(feature = "hydrate")]
use crate::sync::engine::EditorSync;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

/// Spawn the channel client lifecycle as a local async task.
///
/// Returns the outbound byte channel; the caller wraps it in an
/// `EnvelopeSender` and stores it in context. The task reconnects forever
/// with exponential backoff; a pending request is never retried
/// automatically — its busy flag clears when a result eventually arrives.
#[cfg(feature = "hydrate")]
pub fn spawn_channel_client(cx: EffectContext) -> futures::channel::mpsc::UnboundedSender<Vec<u8>> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<Vec<u8>>();

    leptos::task::spawn_local(channel_loop(cx, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn channel_loop(cx: EffectContext, rx: futures::channel::mpsc::UnboundedReceiver<Vec<u8>>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        // Get a WS ticket.
        let ticket = match crate::net::api::create_ws_ticket().await {
            Ok(t) => t,
            Err(e) => {
                leptos::logging::warn!("channel ticket failed: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    backoff_ms,
                )))
                .await;
                backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
                continue;
            }
        };

        // Determine the WebSocket URL for this project's session.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = format!(
            "{ws_proto}://{host}/api/channel?project={}&ticket={ticket}",
            cx.project_id
        );

        match connect_and_run(&ws_url, &cx, &rx).await {
            Ok(()) => {
                leptos::logging::log!("channel disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("channel error: {e}");
            }
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the WebSocket and process envelopes until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    cx: &EffectContext,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<Vec<u8>>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing bytes from our channel to the WS.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(bytes) = rx_borrow.next().await {
            if ws_write.send(Message::Bytes(bytes)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode envelopes and drive the engine.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Bytes(bytes)) => match wire::decode_envelope(&bytes) {
                    Ok(envelope) => dispatch_envelope(&envelope, cx),
                    Err(e) => {
                        leptos::logging::warn!("channel decode error: {e}");
                    }
                },
                Ok(Message::Text(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Narrow an envelope and feed it through the sync engine.
///
/// Unknown ops and non-terminal statuses are dropped here; everything the
/// engine accepts produces effects applied in order on this one logical
/// thread, so no two callbacks ever interleave.
#[cfg(feature = "hydrate")]
fn dispatch_envelope(envelope: &wire::Envelope, cx: &EffectContext) {
    let Some(event) = ChannelEvent::from_envelope(envelope) else {
        return;
    };

    if matches!(event, ChannelEvent::Connected) {
        leptos::logging::log!("channel session established");
    }

    let effects = cx
        .sync
        .try_update(|sync: &mut EditorSync| sync.handle_event(event))
        .unwrap_or_default();
    crate::sync::apply_effects(effects, cx);
}
