//! The mutation dispatcher and document state machine.
//!
//! DESIGN
//! ======
//! Four producers mutate one document: direct local edits, AI-chat rewrites,
//! and server-side undo/redo. `EditorSync` arbitrates them with two entry
//! points: [`EditorSync::dispatch`] for producer requests and
//! [`EditorSync::handle_event`] for channel results and signals. Both return
//! effects instead of performing IO, which keeps the invariants testable:
//!
//! - at most one outstanding request per kind (duplicate dispatch is a
//!   silent no-op);
//! - results across kinds resolve last-writer-wins on content, no merge;
//! - a failed result never touches content but always clears its flag;
//! - while a deployment is in progress every dispatch is a no-op.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::net::types::{ChannelCommand, ChannelEvent, MutationKind, MutationOutcome};
use crate::state::busy::BusyFlags;
use crate::state::deployment::DeploymentState;
use crate::state::document::Document;
use crate::state::notices::NoticeLevel;

/// A producer-side mutation request. Transient; consumed by `dispatch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationRequest {
    /// Replace the document text from the editor view.
    LocalEdit { text: String },
    /// The chat collaborator is about to issue a rewrite out-of-band;
    /// this only claims the chat busy slot.
    ChatUpdate,
    /// Ask the history store to step one revision back.
    Undo,
    /// Ask the history store to step one revision forward.
    Redo,
}

impl MutationRequest {
    /// The producer kind of this request.
    #[must_use]
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::LocalEdit { .. } => MutationKind::LocalEdit,
            Self::ChatUpdate => MutationKind::ChatUpdate,
            Self::Undo => MutationKind::Undo,
            Self::Redo => MutationKind::Redo,
        }
    }
}

/// Side effects the view layer must carry out, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEffect {
    /// Send a command over the channel.
    Send(ChannelCommand),
    /// Force the rendering surface to reload the persisted document.
    ReloadPreview,
    /// Surface a user-visible notice.
    Notice(NoticeLevel, String),
    /// Clear the code-push busy pulse after a short delay.
    SettleCodePulse,
    /// Fire the one-shot deployment celebration.
    Celebrate,
}

/// The page-scoped synchronization state: one document, one writer at a
/// time logically, arbitrarily many readers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorSync {
    pub document: Document,
    pub busy: BusyFlags,
    pub deployment: DeploymentState,
}

impl EditorSync {
    /// Accept or reject a producer request.
    ///
    /// Rejection is silent by design: the duplicate-dispatch and deployment
    /// cases are defensive invariants, not UX paths (the calling surface is
    /// disabled or hidden in both).
    pub fn dispatch(&mut self, request: MutationRequest) -> Vec<SyncEffect> {
        if self.deployment.deploying() {
            return Vec::new();
        }
        if self.busy.is_set(request.kind()) {
            return Vec::new();
        }

        match request {
            MutationRequest::LocalEdit { text } => {
                // Synchronous: only updates local state and marks it dirty.
                // The editor view already shows the text, so no reload.
                self.document.apply_local_edit(text);
                Vec::new()
            }
            MutationRequest::Undo => {
                self.busy.set(MutationKind::Undo);
                vec![SyncEffect::Send(ChannelCommand::RequestUndo)]
            }
            MutationRequest::Redo => {
                self.busy.set(MutationKind::Redo);
                vec![SyncEffect::Send(ChannelCommand::RequestRedo)]
            }
            MutationRequest::ChatUpdate => {
                // The chat collaborator sends its own request; we only track
                // the in-flight slot so duplicates and saves are gated.
                self.busy.set(MutationKind::ChatUpdate);
                Vec::new()
            }
        }
    }

    /// Feed a channel event through the state machine.
    ///
    /// Results are processed even while deploying: the chat surface stays
    /// active and late results must still clear their busy flags.
    pub fn handle_event(&mut self, event: ChannelEvent) -> Vec<SyncEffect> {
        match event {
            ChannelEvent::Connected => Vec::new(),
            ChannelEvent::UndoResult(outcome) => {
                self.apply_remote_result(MutationKind::Undo, outcome)
            }
            ChannelEvent::RedoResult(outcome) => {
                self.apply_remote_result(MutationKind::Redo, outcome)
            }
            ChannelEvent::ChatResult(outcome) => {
                self.apply_remote_result(MutationKind::ChatUpdate, outcome)
            }
            ChannelEvent::CodeUpdate { content } => {
                self.document.accept_remote(content);
                if self.busy.chat {
                    // Chat-triggered replacement: this is the outstanding
                    // chat request resolving.
                    self.busy.clear(MutationKind::ChatUpdate);
                    vec![SyncEffect::ReloadPreview]
                } else {
                    self.busy.code = true;
                    vec![SyncEffect::ReloadPreview, SyncEffect::SettleCodePulse]
                }
            }
            ChannelEvent::DeploymentStarted => {
                self.deployment.start();
                Vec::new()
            }
            ChannelEvent::WebsiteDeployed => {
                if self.deployment.finish() {
                    vec![
                        SyncEffect::Notice(
                            NoticeLevel::Success,
                            "Your website has been deployed!".to_owned(),
                        ),
                        SyncEffect::Celebrate,
                    ]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Injection point for the chat collaborator: a successful AI-driven
    /// rewrite producing a full replacement document.
    pub fn on_chat_update(&mut self, content: String) -> Vec<SyncEffect> {
        self.handle_event(ChannelEvent::ChatResult(MutationOutcome {
            success: true,
            content: Some(content),
            message: None,
        }))
    }

    /// End the busy pulse started by an unsolicited code push.
    pub fn settle_code_update(&mut self) {
        self.busy.code = false;
    }

    /// Whether the preview must show the blocking overlay.
    #[must_use]
    pub fn overlay_busy(&self) -> bool {
        self.busy.any()
    }

    /// Clear the busy flag, then route the outcome: success overwrites the
    /// document (last writer wins) and refreshes the preview; failure leaves
    /// content untouched and only reports.
    fn apply_remote_result(
        &mut self,
        kind: MutationKind,
        outcome: MutationOutcome,
    ) -> Vec<SyncEffect> {
        self.busy.clear(kind);

        if outcome.success {
            let mut effects = Vec::new();
            if let Some(content) = outcome.content {
                self.document.accept_remote(content);
            }
            if let Some(message) = outcome.message {
                effects.push(SyncEffect::Notice(NoticeLevel::Success, message));
            }
            effects.push(SyncEffect::ReloadPreview);
            effects
        } else {
            let message = outcome
                .message
                .unwrap_or_else(|| failure_fallback(kind).to_owned());
            vec![SyncEffect::Notice(NoticeLevel::Error, message)]
        }
    }
}

fn failure_fallback(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::Undo => "Undo failed",
        MutationKind::Redo => "Redo failed",
        MutationKind::ChatUpdate => "The AI update could not be applied",
        MutationKind::LocalEdit => "Edit failed",
    }
}
