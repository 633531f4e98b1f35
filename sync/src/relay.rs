//! Connected clients and message routing

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};

use crate::cache::SpriteCache;
use crate::message::{ClientMessage, ServerMessage};

pub type ClientId = u64;

/// Outgoing queues of every connected client
#[derive(Debug, Clone, Default)]
pub struct Hub {
    next_id: Arc<AtomicU64>,
    clients: Arc<RwLock<HashMap<ClientId, mpsc::UnboundedSender<String>>>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a client, returning its id and the queue its writer drains
    pub async fn register(&self) -> (ClientId, mpsc::UnboundedReceiver<String>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.clients.write().await.insert(id, tx);
        debug!(client = id, "client registered");
        (id, rx)
    }

    pub async fn unregister(&self, id: ClientId) {
        if self.clients.write().await.remove(&id).is_some() {
            debug!(client = id, "client unregistered");
        }
    }

    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Queue a frame for one client
    pub async fn send_to(&self, id: ClientId, text: String) {
        if let Some(tx) = self.clients.read().await.get(&id)
            && tx.send(text).is_err()
        {
            debug!(client = id, "client queue closed");
        }
    }

    /// Queue a frame for every client except `sender`, returning how many
    /// queues accepted it
    pub async fn broadcast_except(&self, sender: ClientId, text: &str) -> usize {
        self.clients
            .read()
            .await
            .iter()
            .filter(|(id, _)| **id != sender)
            .filter(|(_, tx)| tx.send(text.to_string()).is_ok())
            .count()
    }
}

/// Answers client frames and fans out selections
#[derive(Debug, Clone)]
pub struct Relay {
    hub: Hub,
    cache: Arc<SpriteCache>,
}

impl Relay {
    pub fn new(hub: Hub, cache: Arc<SpriteCache>) -> Self {
        Self { hub, cache }
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// Handle one text frame from `from`
    pub async fn handle(&self, from: ClientId, text: &str) {
        let Some(message) = ClientMessage::parse(text) else {
            debug!(client = from, frame = text, "dropping malformed frame");
            return;
        };

        match message {
            ClientMessage::Ping => self.reply(from, &ServerMessage::Pong).await,
            ClientMessage::Identify => {
                let connected = ServerMessage::Connected {
                    server_version: env!("CARGO_PKG_VERSION").to_string(),
                };
                self.reply(from, &connected).await;
            }
            ClientMessage::GetFusionVariants { head_id, body_id } => {
                let variants = match self.cache.index().await {
                    Ok(index) => index.variants(head_id, body_id).to_vec(),
                    Err(e) => {
                        warn!(error = %e, "sprite index unavailable");
                        Vec::new()
                    }
                };
                let reply = ServerMessage::FusionVariants {
                    head_id,
                    body_id,
                    variants,
                };
                self.reply(from, &reply).await;
            }
            ClientMessage::SelectFusionSprite {
                head_id,
                body_id,
                sprite_file,
                player_id,
            } => {
                let selected = ServerMessage::FusionSpriteSelected {
                    head_id,
                    body_id,
                    sprite_file,
                    player_id,
                };
                if let Some(text) = encode(&selected) {
                    let delivered = self.hub.broadcast_except(from, &text).await;
                    debug!(client = from, head_id, body_id, delivered, "relayed sprite selection");
                }
            }
        }
    }

    async fn reply(&self, to: ClientId, message: &ServerMessage) {
        if let Some(text) = encode(message) {
            self.hub.send_to(to, text).await;
        }
    }
}

fn encode(message: &ServerMessage) -> Option<String> {
    message
        .to_json()
        .inspect_err(|e| warn!(error = %e, "failed to encode frame"))
        .ok()
}
