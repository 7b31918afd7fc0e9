//! Typed command/event layer over the wire envelope protocol.
//!
//! DESIGN
//! ======
//! The channel carries untyped envelopes; this module narrows them into
//! tagged unions so the sync engine can be driven through a single dispatch
//! entry point and the at-most-one-in-flight-per-kind invariant stays
//! mechanically checkable. Correlation is by kind: the dispatcher never has
//! two outstanding requests of the same kind, so no request-id matching is
//! needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use wire::{Envelope, Status};

/// The four producers of document mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// Direct manual editing; synchronous, no channel round-trip.
    LocalEdit,
    /// AI-chat-driven rewrite; request issued out-of-band by the chat surface.
    ChatUpdate,
    /// History navigation backward via the server-side history store.
    Undo,
    /// History navigation forward via the server-side history store.
    Redo,
}

/// Outcome of a remote mutation, consumed exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    /// Full replacement document on success.
    pub content: Option<String>,
    /// Collaborator-supplied message for toasts, in both outcomes.
    pub message: Option<String>,
}

impl MutationOutcome {
    fn from_envelope(envelope: &Envelope) -> Self {
        Self {
            success: envelope.status == Status::Done,
            content: envelope.content().map(ToOwned::to_owned),
            message: envelope.message().map(ToOwned::to_owned),
        }
    }
}

/// Outbound commands the sync engine may ask the channel to send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelCommand {
    RequestUndo,
    RequestRedo,
}

impl ChannelCommand {
    /// The mutation kind this command belongs to.
    #[must_use]
    pub fn kind(self) -> MutationKind {
        match self {
            Self::RequestUndo => MutationKind::Undo,
            Self::RequestRedo => MutationKind::Redo,
        }
    }

    /// Build the request envelope for this command.
    #[must_use]
    pub fn into_envelope(self, project_id: &str) -> Envelope {
        let op = match self {
            Self::RequestUndo => wire::OP_CODE_UNDO,
            Self::RequestRedo => wire::OP_CODE_REDO,
        };
        Envelope::request(project_id, op)
    }
}

/// Inbound channel events, each correlated to at most one outstanding
/// command by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelEvent {
    /// The WebSocket session is established (or re-established).
    Connected,
    /// Result of a `RequestUndo` command.
    UndoResult(MutationOutcome),
    /// Result of a `RequestRedo` command.
    RedoResult(MutationOutcome),
    /// Result of an out-of-band chat rewrite request.
    ChatResult(MutationOutcome),
    /// Unsolicited or chat-triggered full-content replacement.
    CodeUpdate { content: String },
    /// Deployment orchestrator started deploying (zero payload).
    DeploymentStarted,
    /// Deployment orchestrator finished deploying (zero payload).
    WebsiteDeployed,
}

impl ChannelEvent {
    /// Narrow a decoded envelope into a typed event.
    ///
    /// Returns `None` for ops this core does not consume and for result
    /// envelopes that are not terminal (`Done`/`Error`).
    #[must_use]
    pub fn from_envelope(envelope: &Envelope) -> Option<Self> {
        let terminal = matches!(envelope.status, Status::Done | Status::Error);

        match envelope.op.as_str() {
            wire::OP_SESSION_CONNECTED => Some(Self::Connected),
            wire::OP_CODE_UNDO if terminal => {
                Some(Self::UndoResult(MutationOutcome::from_envelope(envelope)))
            }
            wire::OP_CODE_REDO if terminal => {
                Some(Self::RedoResult(MutationOutcome::from_envelope(envelope)))
            }
            wire::OP_CHAT_UPDATE if terminal => {
                Some(Self::ChatResult(MutationOutcome::from_envelope(envelope)))
            }
            wire::OP_CODE_UPDATE => envelope.content().map(|content| Self::CodeUpdate {
                content: content.to_owned(),
            }),
            wire::OP_DEPLOY_STARTED => Some(Self::DeploymentStarted),
            wire::OP_DEPLOY_FINISHED => Some(Self::WebsiteDeployed),
            _ => None,
        }
    }
}
