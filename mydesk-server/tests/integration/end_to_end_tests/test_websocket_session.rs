use mydesk_core::{ClientMessage, RoomCode, ServerMessage};
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::{TestClient, TestServer};

#[tokio::test]
async fn test_full_session_over_websocket() {
    init_tracing();

    let server = TestServer::start().await.expect("Failed to start server");
    let mut host = TestClient::connect(&server).await.expect("Host failed to connect");
    let mut viewer = TestClient::connect(&server)
        .await
        .expect("Viewer failed to connect");
    assert_ne!(host.connection_id, viewer.connection_id);

    let room_id = RoomCode::generate();

    host.send(&ClientMessage::CreateRoom {
        room_id: room_id.clone(),
    })
    .await
    .unwrap();
    assert_eq!(
        host.recv().await.unwrap(),
        ServerMessage::RoomCreated {
            room_id: room_id.clone(),
            success: true,
        }
    );

    viewer
        .send(&ClientMessage::JoinRoom {
            room_id: room_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(
        viewer.recv().await.unwrap(),
        ServerMessage::RoomJoined {
            room_id: room_id.clone(),
            success: true,
        }
    );
    assert_eq!(
        host.recv().await.unwrap(),
        ServerMessage::ViewerJoined {
            viewer_id: viewer.connection_id,
            viewer_count: 1,
        }
    );
    assert_eq!(
        host.recv().await.unwrap(),
        ServerMessage::StartCall {
            viewer_id: viewer.connection_id,
        }
    );

    let offer = json!({ "type": "offer", "sdp": "v=0\r\no=- 0 0 IN IP4 127.0.0.1\r\n" });
    host.send(&ClientMessage::Signal {
        room_id: room_id.clone(),
        signal: offer.clone(),
        target_id: Some(viewer.connection_id),
    })
    .await
    .unwrap();
    assert_eq!(
        viewer.recv().await.unwrap(),
        ServerMessage::Signal {
            signal: offer,
            sender_id: host.connection_id,
        }
    );

    host.close().await.unwrap();
    assert_eq!(
        viewer.recv().await.unwrap(),
        ServerMessage::HostDisconnected {
            room_id: room_id.clone(),
        }
    );

    viewer.close().await.unwrap();
}

#[tokio::test]
async fn test_malformed_frames_do_not_close_the_connection() {
    init_tracing();

    let server = TestServer::start().await.expect("Failed to start server");
    let mut client = TestClient::connect(&server).await.unwrap();

    client.send_raw("this is not json").await.unwrap();
    client
        .send_raw(r#"{"event":"join-room","data":{"wrong":"field"}}"#)
        .await
        .unwrap();
    client
        .send_raw(r#"{"event":"join-room","data":{"roomId":"missing"}}"#)
        .await
        .unwrap();

    assert_eq!(
        client.recv().await.unwrap(),
        ServerMessage::RoomError {
            error: "Room not found".into(),
            room_id: RoomCode::from("missing"),
        }
    );

    client.close().await.unwrap();
}
