use mydesk_core::{ConnectionId, RoomCode, ServerMessage};

use crate::integration::{create_test_coordinator, init_tracing};
use crate::utils::{create_room, disconnect, join_room, leave_room};

#[tokio::test]
async fn test_viewer_leave_twice_then_disconnect_notifies_once() {
    init_tracing();

    let (handle, signaling) = create_test_coordinator();
    let host = ConnectionId::new();
    let viewer = ConnectionId::new();

    create_room(&handle, host, "R").await.unwrap();
    join_room(&handle, viewer, "R").await.unwrap();
    signaling.clear().await;

    leave_room(&handle, viewer, "R").await.unwrap();
    leave_room(&handle, viewer, "R").await.unwrap();
    disconnect(&handle, viewer).await.unwrap();
    disconnect(&handle, viewer).await.unwrap();

    assert_eq!(
        signaling.messages_for(&host).await,
        vec![ServerMessage::ViewerLeft {
            viewer_id: viewer,
            viewer_count: 0,
        }]
    );
    assert!(signaling.messages_for(&viewer).await.is_empty());
    assert!(handle.room_info(RoomCode::from("R")).await.unwrap().is_some());
}

#[tokio::test]
async fn test_host_leave_then_disconnect_notifies_once() {
    init_tracing();

    let (handle, signaling) = create_test_coordinator();
    let host = ConnectionId::new();
    let viewer = ConnectionId::new();

    create_room(&handle, host, "R").await.unwrap();
    join_room(&handle, viewer, "R").await.unwrap();
    signaling.clear().await;

    leave_room(&handle, host, "R").await.unwrap();
    leave_room(&handle, host, "R").await.unwrap();
    disconnect(&handle, host).await.unwrap();

    assert_eq!(
        signaling.messages_for(&viewer).await,
        vec![ServerMessage::HostDisconnected {
            room_id: RoomCode::from("R"),
        }]
    );
    assert_eq!(signaling.total().await, 1);
}

#[tokio::test]
async fn test_leave_while_idle_is_silent() {
    init_tracing();

    let (handle, signaling) = create_test_coordinator();
    let loner = ConnectionId::new();

    leave_room(&handle, loner, "nowhere").await.unwrap();
    disconnect(&handle, loner).await.unwrap();

    assert_eq!(signaling.total().await, 0);
    assert_eq!(handle.stats().await.unwrap().connections, 0);
}
