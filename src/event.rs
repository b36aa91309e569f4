use serde::Deserialize;
use serde_json::Value;

/// Events a GhostMesh node broadcasts on its `/ws` route, as serialized on
/// the wire: `{"type": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NetworkEvent {
    PeerConnected { peer_id: String },
    PeerDisconnected { peer_id: String },
    MessageSent { from: String, to: String, protocol: String },
    MessageReceived { from: String, to: String, protocol: String },
    LogEntry { from: String, content: String },
}

impl NetworkEvent {
    pub fn summary(&self) -> String {
        match self {
            NetworkEvent::PeerConnected { peer_id } => {
                format!("peer {peer_id} joined the mesh")
            }
            NetworkEvent::PeerDisconnected { peer_id } => {
                format!("peer {peer_id} left the mesh")
            }
            NetworkEvent::MessageSent { from, to, protocol } => {
                format!("{protocol} message sent from {from} to {to}")
            }
            NetworkEvent::MessageReceived { from, to, protocol } => {
                format!("{protocol} message received from {from} at {to}")
            }
            NetworkEvent::LogEntry { from, content } => {
                format!("log from {from}: {content}")
            }
        }
    }
}

/// The `type` discriminator of a frame, or `(none)` when it is missing.
pub fn event_kind(value: &Value) -> &str {
    value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("(none)")
}

/// Render one decoded frame: a header naming the event type, a summary line
/// when the payload matches a known event, then the full body pretty-printed.
/// Frames outside the known vocabulary are still rendered.
pub fn render(value: &Value) -> String {
    let mut out = format!("[event] type: {}\n", event_kind(value));

    if let Ok(event) = serde_json::from_value::<NetworkEvent>(value.clone()) {
        out.push_str(&format!("        {}\n", event.summary()));
    }

    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    out.push_str(&body);
    out
}
