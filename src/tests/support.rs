//! Mock ChefMate backend for HTTP round-trip tests
//!
//! Runs a hyper server on its own thread and runtime so it can serve both
//! `#[tokio::test]` functions and the blocking `App` tests. Every request is
//! recorded with its JSON body; responses are fixed per path.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

type Routes = Arc<HashMap<String, (u16, String)>>;
type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// A request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Value,
}

/// Handle to a running mock backend
pub struct MockBackend {
    addr: SocketAddr,
    requests: RequestLog,
}

impl MockBackend {
    /// Start serving `(path, status, body)` routes; other paths answer 404
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: Routes = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
                .collect(),
        );
        let requests: RequestLog = Arc::new(Mutex::new(Vec::new()));

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock backend");
        listener.set_nonblocking(true).expect("Failed to set non-blocking");
        let addr = listener.local_addr().expect("No local address");

        let log = requests.clone();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock runtime");

            runtime.block_on(async move {
                let listener = TcpListener::from_std(listener).expect("Failed to adopt listener");
                loop {
                    let Ok((stream, _)) = listener.accept().await else {
                        continue;
                    };
                    let routes = routes.clone();
                    let log = log.clone();

                    tokio::spawn(async move {
                        let io = TokioIo::new(stream);
                        let service = service_fn(move |req| handle(req, routes.clone(), log.clone()));
                        let _ = http1::Builder::new().serve_connection(io, service).await;
                    });
                }
            });
        });

        Self { addr, requests }
    }

    /// Serve the three answer endpoints and a healthy probe
    pub fn healthy() -> Self {
        Self::start(&[
            ("/chat", 200, r#"{"response": "**Hello** from the kitchen", "success": true}"#),
            ("/recipe-search", 200, r#"{"recipes": "1. Fried rice", "success": true}"#),
            ("/substitution", 200, r#"{"substitutions": "- Flax egg", "success": true}"#),
            ("/health", 200, r#"{"status": "healthy", "agent_ready": true}"#),
        ])
    }

    /// Base URL to hand to the client
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Requests received for one path
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

async fn handle(
    req: Request<Incoming>,
    routes: Routes,
    log: RequestLog,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = req.collect().await?.to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    log.lock().expect("request log poisoned").push(RecordedRequest {
        method,
        path: path.clone(),
        body,
    });

    let (status, payload) = routes
        .get(&path)
        .cloned()
        .unwrap_or((404, r#"{"detail": "Not Found"}"#.to_string()));

    Ok(Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(payload)))
        .expect("Failed to build response"))
}

/// URL of a port nothing listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}
