use slateboard_core::{Board, Command, Event, Origin};
use slateboard_shared::{ServerMessage, Shape};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::state::PeerMap;

pub enum BoardRequest {
    Command(Command),
    Snapshot { reply: oneshot::Sender<Vec<Shape>> },
}

/// Enqueue-only handle to the board task. Everything that touches board
/// state rides the same queue, so applies, clears, and snapshot reads keep
/// their submission order.
#[derive(Clone)]
pub struct BoardHandle {
    tx: mpsc::UnboundedSender<BoardRequest>,
}

impl BoardHandle {
    pub fn command(&self, command: Command) {
        let _ = self.tx.send(BoardRequest::Command(command));
    }

    pub fn apply(&self, shape: Shape, origin: Origin) {
        self.command(Command::Apply { shape, origin });
    }

    pub fn clear(&self, origin: Origin) {
        self.command(Command::Clear { origin });
    }

    pub async fn snapshot(&self) -> Vec<Shape> {
        let (reply, response) = oneshot::channel();
        if self.tx.send(BoardRequest::Snapshot { reply }).is_err() {
            warn!("board task is gone, serving empty history");
            return Vec::new();
        }
        response.await.unwrap_or_default()
    }
}

/// One task owns the board outright, drains the request queue in order,
/// and fans resulting events out to peers. Handlers never see the board
/// itself, only the handle.
pub fn spawn_board(peers: PeerMap) -> BoardHandle {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut board = Board::new();
        while let Some(request) = rx.recv().await {
            match request {
                BoardRequest::Command(command) => {
                    for event in board.handle(command) {
                        dispatch_event(&peers, event).await;
                    }
                }
                BoardRequest::Snapshot { reply } => {
                    let _ = reply.send(board.snapshot());
                }
            }
        }
        debug!("board task stopped");
    });
    BoardHandle { tx }
}

async fn dispatch_event(peers: &PeerMap, event: Event) {
    match event {
        Event::Applied { shape, origin } => {
            let message = ServerMessage::NewShape { shape };
            match origin {
                Origin::Peer(sender) => broadcast_except(peers, sender, message).await,
                Origin::Local | Origin::Api => broadcast_all(peers, message).await,
            }
        }
        Event::Cleared { .. } => broadcast_all(peers, ServerMessage::Clear).await,
    }
}

pub async fn send_to(peers: &PeerMap, target: Uuid, message: ServerMessage) {
    let peers = peers.read().await;
    if let Some(tx) = peers.get(&target) {
        let _ = tx.send(message);
    }
}

pub async fn broadcast_except(peers: &PeerMap, sender: Uuid, message: ServerMessage) {
    let mut stale = Vec::new();
    {
        let peers = peers.read().await;
        for (id, tx) in peers.iter() {
            if *id == sender {
                continue;
            }
            if tx.send(message.clone()).is_err() {
                stale.push(*id);
            }
        }
    }

    if !stale.is_empty() {
        let mut peers = peers.write().await;
        for id in stale {
            peers.remove(&id);
        }
    }
}

pub async fn broadcast_all(peers: &PeerMap, message: ServerMessage) {
    let mut stale = Vec::new();
    {
        let peers = peers.read().await;
        for (id, tx) in peers.iter() {
            if tx.send(message.clone()).is_err() {
                stale.push(*id);
            }
        }
    }

    if !stale.is_empty() {
        let mut peers = peers.write().await;
        for id in stale {
            peers.remove(&id);
        }
    }
}
