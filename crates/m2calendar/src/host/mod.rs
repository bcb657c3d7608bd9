//! Notification host implementations and startup selection.

mod bridge;
mod console;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use tokio::io::BufReader;
use tokio::net::TcpStream;

use m2calendar_core::host::NotificationHost;

pub use bridge::{run_json_lines, BridgeHost, BridgeMessage, BridgeReply, HostRequest};
pub use console::{message_prefix, ConsoleHost};

/// Picks the notification host once at startup.
///
/// With a bridge address, connects to the embedding host and serves the
/// bridge protocol on a background task; the console host stays the
/// fallback for every call. Without one, or if the connection fails, the
/// console host is used directly.
pub async fn select_host(
    bridge_addr: Option<&str>,
    fallback: Arc<dyn NotificationHost>,
) -> Arc<dyn NotificationHost> {
    let Some(addr) = bridge_addr else {
        tracing::debug!("No host bridge configured, using console host");
        return fallback;
    };

    match TcpStream::connect(addr).await {
        Ok(stream) => {
            tracing::info!(addr, "Connected to host bridge");
            let (host, requests) = BridgeHost::channel(fallback);
            let (read, write) = stream.into_split();
            tokio::spawn(async move {
                if let Err(error) = run_json_lines(requests, BufReader::new(read), write).await {
                    tracing::warn!(error = %error, "Host bridge stopped");
                }
            });
            Arc::new(host)
        }
        Err(error) => {
            tracing::warn!(addr, error = %error, "Host bridge unavailable, using console host");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testing::ScriptedHost;

    #[tokio::test]
    async fn test_select_host_without_bridge_uses_fallback() {
        let fallback = Arc::new(ScriptedHost::confirming());
        let host = select_host(None, fallback.clone()).await;

        assert!(host.confirm("Delete event?").await);
        assert_eq!(fallback.confirmations(), vec!["Delete event?".to_string()]);
    }

    #[tokio::test]
    async fn test_select_host_unreachable_bridge_uses_fallback() {
        let fallback = Arc::new(ScriptedHost::declining());
        // Port 1 on localhost is essentially never listening.
        let host = select_host(Some("127.0.0.1:1"), fallback.clone()).await;

        assert!(!host.confirm("Delete event?").await);
        assert_eq!(fallback.confirmations().len(), 1);
    }
}
