use std::collections::HashMap;
use std::sync::Arc;

use slateboard_shared::ServerMessage;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::logic::{spawn_board, BoardHandle};

pub type PeerMap = Arc<RwLock<HashMap<Uuid, mpsc::UnboundedSender<ServerMessage>>>>;

#[derive(Clone)]
pub struct AppState {
    pub board: BoardHandle,
    pub peers: PeerMap,
}

impl AppState {
    pub fn new() -> Self {
        let peers: PeerMap = Arc::new(RwLock::new(HashMap::new()));
        let board = spawn_board(peers.clone());
        Self { board, peers }
    }
}
