use super::*;
use serde_json::json;

fn envelope(op: &str, status: Status, data: serde_json::Value) -> Envelope {
    Envelope {
        id: "env-1".to_owned(),
        parent_id: None,
        ts: 7,
        project_id: Some("proj-1".to_owned()),
        op: op.to_owned(),
        status,
        data,
    }
}

// =============================================================
// Commands
// =============================================================

#[test]
fn commands_map_to_their_kind_and_op() {
    assert_eq!(ChannelCommand::RequestUndo.kind(), MutationKind::Undo);
    assert_eq!(ChannelCommand::RequestRedo.kind(), MutationKind::Redo);

    let env = ChannelCommand::RequestUndo.into_envelope("proj-1");
    assert_eq!(env.op, wire::OP_CODE_UNDO);
    assert_eq!(env.status, Status::Request);
    assert_eq!(env.project_id.as_deref(), Some("proj-1"));
}

// =============================================================
// Event narrowing
// =============================================================

#[test]
fn done_undo_envelope_becomes_successful_outcome() {
    let env = envelope(
        wire::OP_CODE_UNDO,
        Status::Done,
        json!({"content": "<html>A</html>", "message": "Undid last change"}),
    );

    let event = ChannelEvent::from_envelope(&env).expect("event");
    let ChannelEvent::UndoResult(outcome) = event else {
        panic!("expected undo result, got {event:?}");
    };
    assert!(outcome.success);
    assert_eq!(outcome.content.as_deref(), Some("<html>A</html>"));
    assert_eq!(outcome.message.as_deref(), Some("Undid last change"));
}

#[test]
fn error_redo_envelope_becomes_failed_outcome() {
    let env = envelope(
        wire::OP_CODE_REDO,
        Status::Error,
        json!({"message": "Nothing to redo"}),
    );

    let Some(ChannelEvent::RedoResult(outcome)) = ChannelEvent::from_envelope(&env) else {
        panic!("expected redo result");
    };
    assert!(!outcome.success);
    assert!(outcome.content.is_none());
    assert_eq!(outcome.message.as_deref(), Some("Nothing to redo"));
}

#[test]
fn non_terminal_result_envelopes_are_ignored() {
    let env = envelope(wire::OP_CODE_UNDO, Status::Request, json!({}));
    assert_eq!(ChannelEvent::from_envelope(&env), None);
}

#[test]
fn code_update_requires_content() {
    let env = envelope(
        wire::OP_CODE_UPDATE,
        Status::Event,
        json!({"content": "<html>push</html>"}),
    );
    assert_eq!(
        ChannelEvent::from_envelope(&env),
        Some(ChannelEvent::CodeUpdate { content: "<html>push</html>".to_owned() })
    );

    let empty = envelope(wire::OP_CODE_UPDATE, Status::Event, json!({}));
    assert_eq!(ChannelEvent::from_envelope(&empty), None);
}

#[test]
fn deployment_signals_carry_no_payload() {
    let started = envelope(wire::OP_DEPLOY_STARTED, Status::Event, json!({}));
    assert_eq!(
        ChannelEvent::from_envelope(&started),
        Some(ChannelEvent::DeploymentStarted)
    );

    let finished = envelope(wire::OP_DEPLOY_FINISHED, Status::Event, json!({}));
    assert_eq!(
        ChannelEvent::from_envelope(&finished),
        Some(ChannelEvent::WebsiteDeployed)
    );
}

#[test]
fn unknown_ops_are_ignored() {
    let env = envelope("billing:invoice", Status::Event, json!({}));
    assert_eq!(ChannelEvent::from_envelope(&env), None);
}
