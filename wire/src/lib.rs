//! Envelope model and protobuf codec for the editor's realtime channel.
//!
//! ARCHITECTURE
//! ============
//! Every message between the browser client and the site backend is an
//! `Envelope`: the client sends request envelopes over WebSocket, the backend
//! routes on `op`, and outcomes flow back as done/error envelopes. Server-side
//! pushes that were never requested (code replacements, deployment lifecycle
//! signals) arrive with `Status::Event`.
//!
//! DESIGN
//! ======
//! - Payloads stay flexible (`serde_json::Value`); the codec never inspects
//!   `data` beyond converting it.
//! - Correlation is by `op` name: the client enforces at most one outstanding
//!   request per op, so no per-request id matching is needed.
//! - Transport encoding is protobuf for compact binary delivery.

use prost::Message;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// OP NAMES
// =============================================================================

/// Sent by the backend once a WebSocket session is established.
pub const OP_SESSION_CONNECTED: &str = "session:connected";

/// Request the history store to step the document one revision back.
pub const OP_CODE_UNDO: &str = "code:undo";

/// Request the history store to step the document one revision forward.
pub const OP_CODE_REDO: &str = "code:redo";

/// Full-content document replacement pushed by the backend.
pub const OP_CODE_UPDATE: &str = "code:update";

/// Outcome of an AI-chat-driven rewrite issued out-of-band by the chat surface.
pub const OP_CHAT_UPDATE: &str = "chat:update";

/// Deployment orchestrator started deploying the site (no payload).
pub const OP_DEPLOY_STARTED: &str = "deploy:started";

/// Deployment orchestrator finished deploying the site (no payload).
pub const OP_DEPLOY_FINISHED: &str = "deploy:finished";

// =============================================================================
// DATA KEYS
// =============================================================================

/// Envelope data key carrying full document text.
pub const KEY_CONTENT: &str = "content";

/// Envelope data key carrying a human-readable outcome message.
pub const KEY_MESSAGE: &str = "message";

// =============================================================================
// TYPES
// =============================================================================

/// Error returned by [`decode_envelope`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw bytes could not be decoded as a protobuf `WireEnvelope`.
    #[error("failed to decode protobuf envelope: {0}")]
    Decode(#[from] prost::DecodeError),
    /// The `status` integer on the wire does not map to a known [`Status`].
    #[error("invalid envelope status: {0}")]
    InvalidStatus(i32),
}

/// Lifecycle position of an envelope in a request/result exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Request sent by the client.
    Request,
    /// Successful terminal result.
    Done,
    /// Failed terminal result.
    Error,
    /// Unsolicited server push with no originating request.
    Event,
}

impl Status {
    /// Convert status into its wire enum integer value.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Request => WireStatus::Request as i32,
            Self::Done => WireStatus::Done as i32,
            Self::Error => WireStatus::Error as i32,
            Self::Event => WireStatus::Event as i32,
        }
    }

    /// Parse a status from its wire enum integer value.
    fn from_i32(value: i32) -> Result<Self, CodecError> {
        match WireStatus::try_from(value) {
            Ok(WireStatus::Request) => Ok(Self::Request),
            Ok(WireStatus::Done) => Ok(Self::Done),
            Ok(WireStatus::Error) => Ok(Self::Error),
            Ok(WireStatus::Event) => Ok(Self::Event),
            Err(_) => Err(CodecError::InvalidStatus(value)),
        }
    }
}

/// A single message on the realtime channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique identifier for this envelope (UUID string).
    pub id: String,
    /// ID of the request envelope this responds to, if any.
    pub parent_id: Option<String>,
    /// Milliseconds since the Unix epoch; the backend fills this in.
    pub ts: i64,
    /// Project (site) context for this envelope, if any.
    pub project_id: Option<String>,
    /// Namespaced operation name, e.g. `"code:undo"`.
    pub op: String,
    /// Lifecycle position of the envelope.
    pub status: Status,
    /// Arbitrary JSON payload.
    pub data: Value,
}

impl Envelope {
    /// Build a client request envelope with an empty payload.
    ///
    /// `ts` is left at zero; the backend stamps envelopes on receipt.
    #[must_use]
    pub fn request(project_id: &str, op: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            parent_id: None,
            ts: 0,
            project_id: Some(project_id.to_owned()),
            op: op.to_owned(),
            status: Status::Request,
            data: Value::Object(Map::new()),
        }
    }

    /// Full document text carried in `data`, if present.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.data.get(KEY_CONTENT).and_then(Value::as_str)
    }

    /// Human-readable outcome message carried in `data`, if present.
    /// Prefers `message`, falling back to `error`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.data
            .get(KEY_MESSAGE)
            .and_then(Value::as_str)
            .or_else(|| self.data.get("error").and_then(Value::as_str))
    }
}

// =============================================================================
// CODEC
// =============================================================================

/// Encode an envelope into protobuf bytes.
#[must_use]
pub fn encode_envelope(envelope: &Envelope) -> Vec<u8> {
    let wire = WireEnvelope {
        id: envelope.id.clone(),
        parent_id: envelope.parent_id.clone(),
        ts: envelope.ts,
        project_id: envelope.project_id.clone(),
        op: envelope.op.clone(),
        status: envelope.status.as_i32(),
        data: Some(json_to_proto(&envelope.data)),
    };

    let mut out = Vec::with_capacity(wire.encoded_len());
    // Encoding into a growable Vec<u8> cannot fail.
    wire.encode(&mut out).unwrap_or_default();
    out
}

/// Decode protobuf bytes into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes and
/// [`CodecError::InvalidStatus`] for out-of-range status values.
pub fn decode_envelope(bytes: &[u8]) -> Result<Envelope, CodecError> {
    let wire = WireEnvelope::decode(bytes)?;
    Ok(Envelope {
        id: wire.id,
        parent_id: wire.parent_id,
        ts: wire.ts,
        project_id: wire.project_id,
        op: wire.op,
        status: Status::from_i32(wire.status)?,
        data: wire
            .data
            .map_or(Value::Object(Map::new()), |v| proto_to_json(&v)),
    })
}

fn json_to_proto(value: &Value) -> prost_types::Value {
    let kind = match value {
        Value::Null => {
            prost_types::value::Kind::NullValue(prost_types::NullValue::NullValue as i32)
        }
        Value::Bool(v) => prost_types::value::Kind::BoolValue(*v),
        Value::Number(v) => prost_types::value::Kind::NumberValue(v.as_f64().unwrap_or(0.0)),
        Value::String(v) => prost_types::value::Kind::StringValue(v.clone()),
        Value::Array(v) => prost_types::value::Kind::ListValue(prost_types::ListValue {
            values: v.iter().map(json_to_proto).collect(),
        }),
        Value::Object(v) => prost_types::value::Kind::StructValue(prost_types::Struct {
            fields: v.iter().map(|(k, v)| (k.clone(), json_to_proto(v))).collect(),
        }),
    };

    prost_types::Value { kind: Some(kind) }
}

fn proto_to_json(value: &prost_types::Value) -> Value {
    let Some(kind) = &value.kind else {
        return Value::Null;
    };

    match kind {
        prost_types::value::Kind::NullValue(_) => Value::Null,
        prost_types::value::Kind::NumberValue(v) => {
            serde_json::Number::from_f64(*v).map_or(Value::Null, Value::Number)
        }
        prost_types::value::Kind::StringValue(v) => Value::String(v.clone()),
        prost_types::value::Kind::BoolValue(v) => Value::Bool(*v),
        prost_types::value::Kind::StructValue(v) => Value::Object(
            v.fields
                .iter()
                .map(|(k, v)| (k.clone(), proto_to_json(v)))
                .collect(),
        ),
        prost_types::value::Kind::ListValue(v) => {
            Value::Array(v.values.iter().map(proto_to_json).collect())
        }
    }
}

// =============================================================================
// WIRE REPRESENTATION
// =============================================================================

#[derive(Clone, PartialEq, Message)]
struct WireEnvelope {
    #[prost(string, tag = "1")]
    id: String,
    #[prost(string, optional, tag = "2")]
    parent_id: Option<String>,
    #[prost(int64, tag = "3")]
    ts: i64,
    #[prost(string, optional, tag = "4")]
    project_id: Option<String>,
    #[prost(string, tag = "5")]
    op: String,
    #[prost(enumeration = "WireStatus", tag = "6")]
    status: i32,
    #[prost(message, optional, tag = "7")]
    data: Option<prost_types::Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, prost::Enumeration)]
#[repr(i32)]
enum WireStatus {
    Request = 0,
    Done = 1,
    Error = 2,
    Event = 3,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
