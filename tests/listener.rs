use futures_util::SinkExt;
use ghostmesh_monitor::listener::{listen, ws_uri, StopReason};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

/// Accepts one websocket connection on an ephemeral port, sends `frames`,
/// then closes. Returns the URI for the listener to attach to.
async fn spawn_node(frames: Vec<Message>) -> String {
    let socket = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (stream, _) = socket.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        for frame in frames {
            ws.send(frame).await.unwrap();
        }
        ws.close(None).await.ok();
    });

    ws_uri("127.0.0.1", port)
}

#[tokio::test]
async fn stops_when_server_closes_immediately() {
    let uri = spawn_node(Vec::new()).await;
    let stopped = listen(&uri).await.unwrap();
    assert_eq!(stopped, StopReason::ServerClosed);
}

#[tokio::test]
async fn consumes_event_frames_until_closure() {
    let uri = spawn_node(vec![
        Message::text(r#"{"type": "ping", "value": 1}"#),
        Message::text(r#"{"type": "PeerConnected", "data": {"peer_id": "12D3KooW"}}"#),
        Message::text(r#"{"value": 2}"#),
    ])
    .await;
    let stopped = listen(&uri).await.unwrap();
    assert_eq!(stopped, StopReason::ServerClosed);
}

#[tokio::test]
async fn unreachable_node_is_a_single_error() {
    // Bind then drop so the port is known-refused.
    let socket = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();
    drop(socket);

    let err = listen(&ws_uri("127.0.0.1", port)).await.unwrap_err();
    assert!(format!("{err:#}").contains("websocket handshake failed"));
}

#[tokio::test]
async fn malformed_frame_terminates_the_listener() {
    let uri = spawn_node(vec![Message::text("not json")]).await;
    let err = listen(&uri).await.unwrap_err();
    assert!(format!("{err:#}").contains("frame is not valid JSON"));
}

#[tokio::test]
async fn ping_frames_are_transport_chatter() {
    let uri = spawn_node(vec![
        Message::Ping(vec![1, 2, 3]),
        Message::text(r#"{"type": "LogEntry", "data": {"from": "node-a", "content": "hello"}}"#),
    ])
    .await;
    let stopped = listen(&uri).await.unwrap();
    assert_eq!(stopped, StopReason::ServerClosed);
}
