//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use clap::Parser;
use futures_util::StreamExt;
use hearth_server::{ServerConfig, ui::serve};
use tokio::{net::TcpListener, sync::oneshot, time::timeout};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Message, client::IntoClientRequest, http::HeaderValue},
};

pub type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

pub const WAIT: Duration = Duration::from_secs(5);

/// In-process server bound to an ephemeral port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(&[]).await
    }

    /// Start with extra command-line flags.
    pub async fn start_with(args: &[&str]) -> Self {
        let mut argv = vec!["hearth-server", "--trace", "off"];
        argv.extend_from_slice(args);
        let config = ServerConfig::try_parse_from(argv).expect("Invalid test config");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let (shutdown, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let signal = async {
                let _ = stopped.await;
            };
            if let Err(e) = serve(listener, &config, signal).await {
                eprintln!("test server error: {e}");
            }
        });

        Self {
            addr,
            shutdown: Some(shutdown),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/room", self.addr)
    }

    /// Connect identifying through the `x-chat-identity` header.
    pub async fn connect(&self, name: &str) -> WsClient {
        self.connect_with_header("x-chat-identity", name).await
    }

    pub async fn connect_with_header(&self, header: &'static str, value: &str) -> WsClient {
        let mut request = self
            .ws_url()
            .into_client_request()
            .expect("Invalid WebSocket request");
        request.headers_mut().insert(
            header,
            HeaderValue::from_str(value).expect("Invalid header value"),
        );
        let (ws, _) = connect_async(request)
            .await
            .expect("Failed to connect WebSocket");
        ws
    }

    /// Poll `/api/room` until it reports `count` members.
    pub async fn wait_for_members(&self, count: usize) -> serde_json::Value {
        let client = reqwest::Client::new();
        let url = format!("{}/api/room", self.base_url());
        timeout(WAIT, async {
            loop {
                let body: serde_json::Value = client
                    .get(&url)
                    .send()
                    .await
                    .expect("Failed to send request")
                    .json()
                    .await
                    .expect("Failed to parse JSON");
                if body["member_count"] == count {
                    return body;
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await
        .expect("Timed out waiting for room membership")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

/// Next chat frame as JSON, skipping control frames.
pub async fn next_chat(ws: &mut WsClient) -> serde_json::Value {
    timeout(WAIT, async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => {
                    return serde_json::from_str(text.as_str()).expect("Invalid chat JSON");
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
                other => panic!("Expected chat frame, got {other:?}"),
            }
        }
    })
    .await
    .expect("Timed out waiting for chat frame")
}
