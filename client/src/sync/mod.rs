//! Document synchronization engine.
//!
//! ARCHITECTURE
//! ============
//! `engine` is the pure core: it owns the document, the per-kind busy flags,
//! and the deployment gate, and turns producer requests and channel events
//! into state transitions plus a list of [`engine::SyncEffect`]s. It never
//! touches signals, sockets, or timers, so every invariant is natively
//! testable.
//!
//! `preview` decides when the rendering surface reloads and under which
//! viewport mode.
//!
//! `apply_effects` is the only bridge from effects to the reactive world:
//! it sends channel commands, bumps the preview epoch, queues notices, and
//! schedules the short settle/celebration timers.

pub mod engine;
pub mod preview;

use leptos::prelude::{RwSignal, Update};

use crate::app::EnvelopeSender;
use crate::state::notices::NoticeState;
use engine::{EditorSync, SyncEffect};
use preview::PreviewState;

/// Everything the effect applier needs from the page-level controller.
#[derive(Clone)]
pub struct EffectContext {
    pub project_id: String,
    pub sync: RwSignal<EditorSync>,
    pub preview: RwSignal<PreviewState>,
    pub notices: RwSignal<NoticeState>,
    pub sender: RwSignal<EnvelopeSender>,
}

/// Duration of the busy pulse that covers an unsolicited code refresh.
#[cfg(feature = "hydrate")]
const CODE_PULSE_MS: u32 = 1_000;

/// Duration the celebratory overlay stays up after a deployment completes.
#[cfg(feature = "hydrate")]
const CELEBRATE_MS: u32 = 3_000;

/// Apply engine effects to the page.
///
/// Must run on the page's single logical thread; effects are applied in
/// order, so a `Send` queued before a `ReloadPreview` reaches the channel
/// before the preview refreshes.
pub fn apply_effects(effects: Vec<SyncEffect>, cx: &EffectContext) {
    for effect in effects {
        match effect {
            SyncEffect::Send(command) => {
                let envelope = command.into_envelope(&cx.project_id);
                if !cx.sender.with_untracked_send(&envelope) {
                    // The channel reconnects on its own; the busy flag clears
                    // when the retried user action eventually round-trips.
                    leptos::logging::warn!("channel send failed: {}", envelope.op);
                }
            }
            SyncEffect::ReloadPreview => {
                cx.preview.update(PreviewState::request_reload);
            }
            SyncEffect::Notice(level, message) => {
                cx.notices.update(|n| {
                    n.push(level, message);
                });
            }
            SyncEffect::SettleCodePulse => {
                #[cfg(feature = "hydrate")]
                {
                    let sync = cx.sync;
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            CODE_PULSE_MS,
                        )))
                        .await;
                        sync.update(EditorSync::settle_code_update);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    cx.sync.update(EditorSync::settle_code_update);
                }
            }
            SyncEffect::Celebrate => {
                cx.preview.update(|p| p.celebrating = true);
                #[cfg(feature = "hydrate")]
                {
                    let preview = cx.preview;
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            CELEBRATE_MS,
                        )))
                        .await;
                        preview.update(|p| p.celebrating = false);
                    });
                }
            }
        }
    }
}

/// Small extension so `apply_effects` can send without tracking the signal.
trait SenderExt {
    fn with_untracked_send(&self, envelope: &wire::Envelope) -> bool;
}

impl SenderExt for RwSignal<EnvelopeSender> {
    fn with_untracked_send(&self, envelope: &wire::Envelope) -> bool {
        use leptos::prelude::GetUntracked;
        self.get_untracked().send(envelope)
    }
}
