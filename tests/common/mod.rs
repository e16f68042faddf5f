#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

pub const SAMPLE_VERIFICATION: &str = r#"{"filename":"a.otf","format":"OpenType","tables":["cmap","glyf"],"details":{"family":"Test"}}"#;
pub const TTF_BYTES: &[u8] = &[0x00, 0x01, 0x00, 0x00, 0x00, 0x0b, 0x00, 0x80];
pub const OTF_BYTES: &[u8] = b"OTTO\x00\x0b\x00\x80";

#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub verification: Option<&'static str>,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl StubReply {
    pub fn converted(verification: Option<&'static str>) -> Self {
        Self {
            status: StatusCode::OK,
            verification,
            body: TTF_BYTES.to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn failed(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            verification: None,
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedPart {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Stand-in for the remote conversion service.
#[derive(Clone)]
pub struct ConversionStub {
    pub endpoint: String,
    reply: StubReply,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

impl ConversionStub {
    pub async fn start(reply: StubReply) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");

        let stub = Self {
            endpoint: format!("http://{}/convert", addr),
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        };

        let router = Router::new()
            .route("/convert", post(stub_convert))
            .with_state(stub.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });

        stub
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ReceivedPart> {
        self.received.lock().unwrap().clone()
    }
}

async fn stub_convert(State(stub): State<ConversionStub>, mut multipart: Multipart) -> Response {
    stub.calls.fetch_add(1, Ordering::SeqCst);

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let content = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        stub.received.lock().unwrap().push(ReceivedPart {
            field: field_name,
            filename,
            content_type,
            content,
        });
    }

    if !stub.reply.delay.is_zero() {
        tokio::time::sleep(stub.reply.delay).await;
    }

    let mut headers = HeaderMap::new();
    if let Some(verification) = stub.reply.verification {
        headers.insert("X-Font-Verification", HeaderValue::from_static(verification));
    }

    (stub.reply.status, headers, stub.reply.body.clone()).into_response()
}
