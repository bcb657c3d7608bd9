//! Host adapter that forwards dialogs to the embedding mini-app host.
//!
//! [`BridgeHost`] turns each call into a [`HostRequest`] on a channel. A
//! transport task ([`run_json_lines`]) owns the other end and speaks a
//! line-delimited JSON protocol with the host. If the channel is closed or
//! the host never answers, the call falls back to the fallback host.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, oneshot};

use m2calendar_core::host::{HostError, NotificationHost, NotificationKind, Result};

/// Channel capacity for pending host requests.
const CHANNEL_CAPACITY: usize = 16;

/// A dialog request for the embedding host.
#[derive(Debug)]
pub enum HostRequest {
    Alert {
        message: String,
        kind: NotificationKind,
    },
    Confirm {
        message: String,
        reply: oneshot::Sender<bool>,
    },
}

/// Notification host backed by the embedding host's native dialogs.
#[derive(Clone)]
pub struct BridgeHost {
    tx: mpsc::Sender<HostRequest>,
    fallback: Arc<dyn NotificationHost>,
}

impl BridgeHost {
    pub fn new(tx: mpsc::Sender<HostRequest>, fallback: Arc<dyn NotificationHost>) -> Self {
        Self { tx, fallback }
    }

    /// Creates a bridge host together with the receiving end for a transport.
    pub fn channel(fallback: Arc<dyn NotificationHost>) -> (Self, mpsc::Receiver<HostRequest>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self::new(tx, fallback), rx)
    }

    async fn send_alert(&self, message: &str, kind: NotificationKind) -> Result<()> {
        self.tx
            .send(HostRequest::Alert {
                message: message.to_string(),
                kind,
            })
            .await
            .map_err(|_| HostError::Unavailable("host channel closed".to_string()))
    }

    async fn ask(&self, message: &str) -> Result<bool> {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(HostRequest::Confirm {
                message: message.to_string(),
                reply,
            })
            .await
            .map_err(|_| HostError::Unavailable("host channel closed".to_string()))?;

        answer
            .await
            .map_err(|_| HostError::Unavailable("host dropped the confirmation".to_string()))
    }
}

#[async_trait]
impl NotificationHost for BridgeHost {
    async fn show_message(&self, message: &str, kind: NotificationKind) {
        if let Err(error) = self.send_alert(message, kind).await {
            tracing::warn!(error = %error, "Falling back for alert");
            self.fallback.show_message(message, kind).await;
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        match self.ask(message).await {
            Ok(confirmed) => confirmed,
            Err(error) => {
                tracing::warn!(error = %error, "Falling back for confirmation");
                self.fallback.confirm(message).await
            }
        }
    }
}

/// Outbound line of the bridge protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum BridgeMessage {
    ShowAlert {
        id: u64,
        message: String,
        kind: NotificationKind,
    },
    ShowConfirm {
        id: u64,
        message: String,
    },
}

/// Inbound answer to a `showConfirm` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeReply {
    pub id: u64,
    pub confirmed: bool,
}

/// Serves host requests over a line-delimited JSON stream until the request
/// channel closes or the host hangs up.
///
/// Requests are handled one at a time; a confirmation waits for the reply
/// line with the matching `id`. Lines that do not parse or carry another id
/// are skipped. When the host's side reaches EOF the pending confirmation
/// is dropped, which sends the caller to its fallback.
pub async fn run_json_lines<R, W>(
    mut requests: mpsc::Receiver<HostRequest>,
    mut reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut next_id: u64 = 1;

    while let Some(request) = requests.recv().await {
        let id = next_id;
        next_id += 1;

        match request {
            HostRequest::Alert { message, kind } => {
                write_line(&mut writer, &BridgeMessage::ShowAlert { id, message, kind }).await?;
            }
            HostRequest::Confirm { message, reply } => {
                write_line(&mut writer, &BridgeMessage::ShowConfirm { id, message }).await?;

                let mut line = String::new();
                loop {
                    line.clear();
                    if reader.read_line(&mut line).await? == 0 {
                        tracing::warn!(id, "Host closed the bridge while confirming");
                        return Ok(());
                    }
                    match serde_json::from_str::<BridgeReply>(line.trim()) {
                        Ok(answer) if answer.id == id => {
                            let _ = reply.send(answer.confirmed);
                            break;
                        }
                        Ok(answer) => {
                            tracing::debug!(expected = id, got = answer.id, "Skipping stale reply");
                        }
                        Err(error) => {
                            tracing::debug!(error = %error, "Skipping unparseable bridge line");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

async fn write_line<W>(writer: &mut W, message: &BridgeMessage) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(message).map_err(std::io::Error::other)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await
}
