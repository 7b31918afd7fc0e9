use super::*;

fn sample_envelope() -> Envelope {
    Envelope {
        id: "env-1".to_owned(),
        parent_id: Some("req-1".to_owned()),
        ts: 42,
        project_id: Some("proj-1".to_owned()),
        op: OP_CODE_UNDO.to_owned(),
        status: Status::Done,
        data: serde_json::json!({
            "content": "<html>A</html>",
            "message": "Undid last change",
            "steps": [1.0, 2.0],
            "meta": {"k": "v", "nil": null}
        }),
    }
}

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_numeric_mapping_matches_wire_enum() {
    assert_eq!(Status::Request.as_i32(), 0);
    assert_eq!(Status::Done.as_i32(), 1);
    assert_eq!(Status::Error.as_i32(), 2);
    assert_eq!(Status::Event.as_i32(), 3);
}

#[test]
fn status_from_wire_rejects_out_of_range_value() {
    let err = Status::from_i32(99).expect_err("status should be invalid");
    assert!(matches!(err, CodecError::InvalidStatus(99)));
}

#[test]
fn status_serializes_as_lowercase_json() {
    assert_eq!(
        serde_json::to_string(&Status::Event).expect("serialize"),
        "\"event\""
    );
    assert_eq!(
        serde_json::from_str::<Status>("\"error\"").expect("deserialize"),
        Status::Error
    );
}

// =============================================================
// Envelope helpers
// =============================================================

#[test]
fn request_envelope_has_empty_payload_and_fresh_id() {
    let a = Envelope::request("proj-1", OP_CODE_UNDO);
    let b = Envelope::request("proj-1", OP_CODE_UNDO);

    assert_eq!(a.status, Status::Request);
    assert_eq!(a.op, OP_CODE_UNDO);
    assert_eq!(a.project_id.as_deref(), Some("proj-1"));
    assert_eq!(a.data, serde_json::json!({}));
    assert_ne!(a.id, b.id);
}

#[test]
fn content_accessor_reads_data_content() {
    let env = sample_envelope();
    assert_eq!(env.content(), Some("<html>A</html>"));
}

#[test]
fn message_accessor_prefers_message_then_error() {
    let env = sample_envelope();
    assert_eq!(env.message(), Some("Undid last change"));

    let mut env = sample_envelope();
    env.data = serde_json::json!({"error": "nothing to undo"});
    assert_eq!(env.message(), Some("nothing to undo"));
}

// =============================================================
// Codec
// =============================================================

#[test]
fn encode_decode_round_trip_preserves_envelope() {
    let env = sample_envelope();
    let bytes = encode_envelope(&env);
    assert!(!bytes.is_empty());

    let decoded = decode_envelope(&bytes).expect("decode should succeed");
    assert_eq!(decoded, env);
}

#[test]
fn decode_rejects_malformed_bytes() {
    let err = decode_envelope(&[0xff, 0x00, 0x01]).expect_err("bytes should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_rejects_invalid_wire_status() {
    let wire = WireEnvelope {
        id: "env-1".to_owned(),
        parent_id: None,
        ts: 1,
        project_id: None,
        op: OP_DEPLOY_FINISHED.to_owned(),
        status: 77,
        data: None,
    };
    let mut bytes = Vec::new();
    wire.encode(&mut bytes).expect("encode");

    let err = decode_envelope(&bytes).expect_err("status should fail");
    assert!(matches!(err, CodecError::InvalidStatus(77)));
}

#[test]
fn decode_defaults_missing_data_to_empty_object() {
    let wire = WireEnvelope {
        id: "env-1".to_owned(),
        parent_id: None,
        ts: 1,
        project_id: None,
        op: OP_DEPLOY_STARTED.to_owned(),
        status: Status::Event.as_i32(),
        data: None,
    };
    let mut bytes = Vec::new();
    wire.encode(&mut bytes).expect("encode");

    let env = decode_envelope(&bytes).expect("decode");
    assert_eq!(env.data, serde_json::json!({}));
}

#[test]
fn integer_json_numbers_normalize_to_float_numbers() {
    let mut env = sample_envelope();
    env.data = serde_json::json!({"count": 2});

    let decoded = decode_envelope(&encode_envelope(&env)).expect("decode");
    assert_eq!(decoded.data.get("count"), Some(&serde_json::json!(2.0)));
}
