//! Websocket transport for the relay

use std::net::SocketAddr;

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::relay::Relay;

/// Accept websocket clients forever, one task per connection
pub async fn serve(listener: TcpListener, relay: Relay) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "failed to accept socket client");
                continue;
            }
        };

        let relay = relay.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer, relay).await {
                debug!(%peer, error = %e, "socket connection closed with error");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, relay: Relay) -> Result<()> {
    let ws = accept_async(stream)
        .await
        .context("WebSocket handshake failed")?;
    let (mut sink, mut incoming) = ws.split();

    let (id, mut outgoing) = relay.hub().register().await;
    info!(%peer, client = id, "socket client connected");

    let writer = tokio::spawn(async move {
        while let Some(text) = outgoing.recv().await {
            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    let result = async {
        while let Some(message) = incoming.next().await {
            match message.context("WebSocket error")? {
                Message::Text(text) => relay.handle(id, &text).await,
                Message::Close(_) => break,
                _ => {}
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    relay.hub().unregister(id).await;
    writer.abort();
    info!(%peer, client = id, "socket client disconnected");
    result
}
