#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use academy_tracker::{
    app,
    state::AppState,
    store::{Collection, memory::MemoryStore},
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .seed(
            Collection::Invitations,
            vec![
                json!({
                    "id": "inv-1", "company": "Acme", "name": "Ada", "sales_rep": "Jane",
                    "course": "LEAD", "region": "EMEA", "cohort_date": "2026-03-01",
                    "status": "Invited", "created_at": "2026-09-01T10:00:00Z"
                }),
                json!({
                    "id": "inv-2", "company": "Globex", "name": "Grace", "sales_rep": "Omar",
                    "course": "LEAD", "region": "NAMER", "cohort_date": "2026-04-01",
                    "status": "Confirmed", "created_at": "2026-09-02T10:00:00Z"
                }),
                json!({
                    "id": "inv-3", "company": "Initech", "name": "Ivan", "sales_rep": "Jane",
                    "course": "LEAD", "region": "EMEA", "cohort_date": "2099-03-01",
                    "status": "Confirmed", "created_at": "2026-09-03T10:00:00Z"
                }),
            ],
        )
        .await;
    store
        .seed(
            Collection::SalesReps,
            vec![json!({"id": "rep-1", "name": "Jane"}), json!({"id": "rep-2", "name": "Omar"})],
        )
        .await;
    store
        .seed(
            Collection::Cohorts,
            vec![
                json!({"id": "c-0", "name": "Leadership Spring", "course": "LEAD", "region": "EMEA", "date": "2026-03-01", "seats": 20}),
                json!({"id": "c-1", "name": "Leadership EMEA", "course": "LEAD", "region": "EMEA", "date": "2099-03-01", "seats": 20}),
                json!({"id": "c-2", "name": "Leadership NAMER", "course": "LEAD", "region": "NAMER", "date": "2099-04-01", "seats": 12}),
            ],
        )
        .await;
    store
}

/// Serve the app on an ephemeral port. The first load is done before
/// returning unless `loaded` is false.
pub async fn spawn(store: Arc<MemoryStore>, loaded: bool) -> SocketAddr {
    let state = AppState::with_store(store);
    if loaded {
        state.refresh().await;
    }
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app(state)).await.expect("serve app") });
    addr
}

pub async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    form: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    match form {
        Some(body) => {
            req.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
            req.push_str(&format!("Content-Length: {}\r\n\r\n{body}", body.len()));
        }
        None => req.push_str("Content-Length: 0\r\n\r\n"),
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
    let (status, _, body) = send_raw(addr, "GET", path, None).await;
    (status, body)
}

pub async fn post(addr: SocketAddr, path: &str, form: &str) -> (u16, String) {
    let (status, head, _) = send_raw(addr, "POST", path, Some(form)).await;
    (status, head)
}

pub async fn get_json(addr: SocketAddr, path: &str) -> Value {
    let (status, body) = get(addr, path).await;
    assert_eq!(status, 200, "{path}: {body}");
    serde_json::from_str(&body).expect("json body")
}
