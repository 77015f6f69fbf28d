//! axum WebSocket adapter for the framed transport contract.

use async_trait::async_trait;
use axum::extract::ws::{CloseFrame, Message as WsMessage, Utf8Bytes, WebSocket, close_code};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};

use crate::{
    domain::{FrameReceiver, FrameSender, Message, TransportError},
    infrastructure::dto::websocket::{OutboundChatMessage, decode_inbound},
};

/// Split an upgraded socket into the halves owned by the read and write loops.
pub fn split(socket: WebSocket) -> (WebSocketReceiver, WebSocketSender) {
    let (sink, stream) = socket.split();
    (WebSocketReceiver { stream }, WebSocketSender { sink })
}

/// Receiving half of an upgraded WebSocket.
pub struct WebSocketReceiver {
    stream: SplitStream<WebSocket>,
}

#[async_trait]
impl FrameReceiver for WebSocketReceiver {
    async fn receive(&mut self) -> Result<Option<String>, TransportError> {
        while let Some(frame) = self.stream.next().await {
            match frame.map_err(|e| TransportError::Receive(Box::new(e)))? {
                WsMessage::Text(text) => return Ok(Some(decode_inbound(text.as_str()))),
                WsMessage::Binary(bytes) => {
                    return Ok(Some(decode_inbound(&String::from_utf8_lossy(&bytes))));
                }
                WsMessage::Close(_) => return Ok(None),
                // Ping/pong is handled automatically by the WebSocket protocol
                WsMessage::Ping(_) | WsMessage::Pong(_) => {}
            }
        }
        Ok(None)
    }
}

/// Sending half of an upgraded WebSocket.
pub struct WebSocketSender {
    sink: SplitSink<WebSocket, WsMessage>,
}

#[async_trait]
impl FrameSender for WebSocketSender {
    async fn send(&mut self, message: &Message) -> Result<(), TransportError> {
        let json = serde_json::to_string(&OutboundChatMessage::from(message))
            .map_err(|e| TransportError::Encode(Box::new(e)))?;
        self.sink
            .send(WsMessage::Text(json.into()))
            .await
            .map_err(|e| TransportError::Send(Box::new(e)))
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        let frame = CloseFrame {
            code: close_code::NORMAL,
            reason: Utf8Bytes::from_static(""),
        };
        self.sink
            .send(WsMessage::Close(Some(frame)))
            .await
            .map_err(|e| TransportError::Send(Box::new(e)))
    }
}
