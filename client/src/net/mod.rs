//! Network layer: typed channel protocol, WebSocket client, REST gateway.

pub mod api;
pub mod channel_client;
pub mod types;
