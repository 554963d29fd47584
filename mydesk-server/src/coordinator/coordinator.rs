use crate::config::SweepConfig;
use crate::coordinator::{
    Connection, ConnectionState, CoordinatorCommand, CoordinatorHandle, CoordinatorStats,
};
use crate::registry::RoomRegistry;
use crate::signaling::SignalingOutput;
use mydesk_core::{ClientMessage, ConnectionId, RoomCode, ServerMessage};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Owns the room registry and every connection's role.
///
/// Runs as a single task: commands and sweep ticks are handled one at a
/// time, in arrival order, so no handler ever sees a half-applied change.
pub struct Coordinator {
    registry: RoomRegistry,
    connections: HashMap<ConnectionId, Connection>,
    command_rx: mpsc::Receiver<CoordinatorCommand>,
    output: Arc<dyn SignalingOutput>,
    sweep: SweepConfig,
}

impl Coordinator {
    pub fn new(
        command_rx: mpsc::Receiver<CoordinatorCommand>,
        output: Arc<dyn SignalingOutput>,
        sweep: SweepConfig,
    ) -> Self {
        Self {
            registry: RoomRegistry::new(),
            connections: HashMap::new(),
            command_rx,
            output,
            sweep,
        }
    }

    /// Starts a coordinator task and returns its handle.
    pub fn spawn(
        output: Arc<dyn SignalingOutput>,
        sweep: SweepConfig,
        buffer: usize,
    ) -> CoordinatorHandle {
        let (tx, rx) = mpsc::channel(buffer);
        tokio::spawn(Self::new(rx, output, sweep).run());
        CoordinatorHandle::new(tx)
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    pub fn connection_state(&self, id: &ConnectionId) -> ConnectionState {
        self.connections
            .get(id)
            .map(|c| c.state.clone())
            .unwrap_or_default()
    }

    pub async fn run(mut self) {
        info!("Coordinator event loop started");

        let period = self.sweep.interval.max(Duration::from_millis(1));
        let mut sweep_timer = time::interval_at(Instant::now() + period, period);
        sweep_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(c) => self.handle_command(c).await,
                        None => {
                            info!("Command channel closed. Shutting down coordinator.");
                            break;
                        }
                    }
                }

                _ = sweep_timer.tick() => {
                    self.sweep_expired();
                }
            }
        }

        info!("Coordinator event loop finished");
    }

    pub async fn handle_command(&mut self, cmd: CoordinatorCommand) {
        match cmd {
            CoordinatorCommand::Connect { connection_id } => {
                self.connections.entry(connection_id).or_default();
                info!(connection = %connection_id, "Client connected");
            }

            CoordinatorCommand::Message {
                connection_id,
                message,
            } => {
                self.connections.entry(connection_id).or_default();
                self.handle_message(connection_id, message).await;
            }

            CoordinatorCommand::Disconnect { connection_id } => {
                self.leave_current(connection_id).await;
                if let Some(conn) = self.connections.remove(&connection_id) {
                    info!(
                        connection = %connection_id,
                        session = ?conn.connected_at.elapsed(),
                        "Client disconnected"
                    );
                }
            }

            CoordinatorCommand::RoomInfo { room_id, reply } => {
                let _ = reply.send(self.registry.room_info(room_id.as_str()));
            }

            CoordinatorCommand::Stats { reply } => {
                let _ = reply.send(CoordinatorStats {
                    active_rooms: self.registry.len(),
                    connections: self.connections.len(),
                });
            }

            CoordinatorCommand::Sweep { reply } => {
                let removed = self.sweep_expired();
                let _ = reply.send(removed);
            }
        }
    }

    /// Routes a client message by message type and the sender's current role.
    ///
    /// A request that does not fit the current role first leaves that role,
    /// so the most recent intent wins.
    async fn handle_message(&mut self, id: ConnectionId, message: ClientMessage) {
        match (message, self.connection_state(&id)) {
            (ClientMessage::CreateRoom { room_id }, ConnectionState::Hosting(current))
                if current == room_id =>
            {
                self.output
                    .send(&id, ServerMessage::RoomCreated { room_id, success: true })
                    .await;
            }

            (ClientMessage::CreateRoom { room_id }, _) => {
                self.leave_current(id).await;
                self.create_room(id, room_id).await;
            }

            (ClientMessage::JoinRoom { room_id }, ConnectionState::Viewing(current))
                if current == room_id =>
            {
                self.output
                    .send(&id, ServerMessage::RoomJoined { room_id, success: true })
                    .await;
            }

            (ClientMessage::JoinRoom { room_id }, _) => {
                self.leave_current(id).await;
                self.join_room(id, room_id).await;
            }

            (ClientMessage::LeaveRoom { room_id }, state) => {
                if let Some(current) = state.room().filter(|current| **current != room_id) {
                    debug!(
                        connection = %id,
                        requested = %room_id,
                        current = %current,
                        "Leave names another room; leaving the current one"
                    );
                }
                self.leave_current(id).await;
            }

            (
                ClientMessage::Signal {
                    room_id,
                    signal,
                    target_id,
                },
                state,
            ) => {
                let msg = ServerMessage::Signal {
                    signal,
                    sender_id: id,
                };
                self.relay(id, &state, &room_id, target_id, msg).await;
            }

            (
                ClientMessage::IceCandidate {
                    room_id,
                    candidate,
                    target_id,
                },
                state,
            ) => {
                let msg = ServerMessage::IceCandidate {
                    candidate,
                    sender_id: id,
                };
                self.relay(id, &state, &room_id, target_id, msg).await;
            }
        }
    }

    async fn create_room(&mut self, id: ConnectionId, room_id: RoomCode) {
        let previous_host = self
            .registry
            .get_room(room_id.as_str())
            .and_then(|room| room.host);

        if let Some(previous) = previous_host.filter(|previous| *previous != id) {
            self.evict_host(previous, &room_id).await;
        }

        self.registry.set_host(&room_id, id);
        self.set_state(id, ConnectionState::Hosting(room_id.clone()));

        info!(
            room = %room_id,
            host = %id,
            active_rooms = self.registry.len(),
            "Room created"
        );

        self.output
            .send(&id, ServerMessage::RoomCreated { room_id, success: true })
            .await;
    }

    /// Another connection claimed `room_id`: tear the old session down and tell everyone.
    async fn evict_host(&mut self, previous: ConnectionId, room_id: &RoomCode) {
        warn!(room = %room_id, previous_host = %previous, "Room claimed by another connection");

        self.close_room(room_id).await;
        self.set_state(previous, ConnectionState::Idle);
        self.output
            .send(
                &previous,
                ServerMessage::HostReplaced {
                    room_id: room_id.clone(),
                },
            )
            .await;
    }

    async fn join_room(&mut self, id: ConnectionId, room_id: RoomCode) {
        let viewer_count = match self.registry.add_viewer(&room_id, id) {
            Ok(count) => count,
            Err(e) => {
                info!(room = %room_id, connection = %id, "Join rejected: {}", e);
                self.output
                    .send(
                        &id,
                        ServerMessage::RoomError {
                            error: e.to_string(),
                            room_id,
                        },
                    )
                    .await;
                return;
            }
        };

        self.set_state(id, ConnectionState::Viewing(room_id.clone()));
        let host = self
            .registry
            .get_room(room_id.as_str())
            .and_then(|room| room.host);

        info!(room = %room_id, viewer = %id, viewers = viewer_count, "Viewer joined");

        self.output
            .send(&id, ServerMessage::RoomJoined { room_id, success: true })
            .await;

        if let Some(host) = host {
            self.output
                .send(
                    &host,
                    ServerMessage::ViewerJoined {
                        viewer_id: id,
                        viewer_count,
                    },
                )
                .await;
            self.output
                .send(&host, ServerMessage::StartCall { viewer_id: id })
                .await;
        }
    }

    /// Drops whatever role `id` holds. Leaving twice is a no-op.
    async fn leave_current(&mut self, id: ConnectionId) {
        let state = match self.connections.get_mut(&id) {
            Some(conn) => std::mem::take(&mut conn.state),
            None => return,
        };

        match state {
            ConnectionState::Idle => {}

            ConnectionState::Hosting(room_id) => {
                let still_host = self
                    .registry
                    .get_room(room_id.as_str())
                    .is_some_and(|room| room.host == Some(id));
                if still_host {
                    self.close_room(&room_id).await;
                }
            }

            ConnectionState::Viewing(room_id) => {
                let Some(viewer_count) = self.registry.remove_viewer(&room_id, &id) else {
                    return;
                };

                info!(room = %room_id, viewer = %id, viewers = viewer_count, "Viewer left");

                let host = self
                    .registry
                    .get_room(room_id.as_str())
                    .and_then(|room| room.host);
                if let Some(host) = host {
                    self.output
                        .send(
                            &host,
                            ServerMessage::ViewerLeft {
                                viewer_id: id,
                                viewer_count,
                            },
                        )
                        .await;
                }
            }
        }
    }

    /// Deletes the room and tells its viewers the host is gone.
    async fn close_room(&mut self, room_id: &RoomCode) {
        let Some(viewers) = self.registry.remove_host(room_id) else {
            return;
        };
        let viewers: Vec<ConnectionId> = viewers.into_iter().collect();

        for viewer in &viewers {
            if let Some(conn) = self.connections.get_mut(viewer) {
                if conn.state.room() == Some(room_id) {
                    conn.state = ConnectionState::Idle;
                }
            }
        }

        self.output
            .send_all(
                &viewers,
                ServerMessage::HostDisconnected {
                    room_id: room_id.clone(),
                },
            )
            .await;
    }

    /// Forwards an opaque payload to one named member or to the rest of the room.
    async fn relay(
        &self,
        sender: ConnectionId,
        state: &ConnectionState,
        room_id: &RoomCode,
        target: Option<ConnectionId>,
        msg: ServerMessage,
    ) {
        if state.room() != Some(room_id) {
            debug!(connection = %sender, room = %room_id, "Dropping relay from non-member");
            return;
        }

        let Some(room) = self.registry.get_room(room_id.as_str()) else {
            debug!(connection = %sender, room = %room_id, "Dropping relay for missing room");
            return;
        };

        let recipients = match target {
            Some(target) if target != sender && room.is_member(&target) => vec![target],
            Some(target) => {
                debug!(
                    connection = %sender,
                    room = %room_id,
                    target = %target,
                    "Dropping relay to peer outside the room"
                );
                return;
            }
            None => room.members_except(&sender),
        };

        self.output.send_all(&recipients, msg).await;
    }

    fn sweep_expired(&mut self) -> Vec<RoomCode> {
        let removed = self.registry.sweep_expired(self.sweep.max_age);
        if removed.is_empty() {
            return removed;
        }

        for conn in self.connections.values_mut() {
            if let ConnectionState::Hosting(code) = &conn.state {
                if removed.contains(code) {
                    conn.state = ConnectionState::Idle;
                }
            }
        }

        info!(
            removed = removed.len(),
            active_rooms = self.registry.len(),
            "Expired rooms swept"
        );
        removed
    }

    fn set_state(&mut self, id: ConnectionId, state: ConnectionState) {
        self.connections.entry(id).or_default().state = state;
    }
}
