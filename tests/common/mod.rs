#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ollama_chat_relay::config::AppConfig;
use ollama_chat_relay::llm::create_provider;
use ollama_chat_relay::routes::configure_routes;
use ollama_chat_relay::state::AppState;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;

/// Generate bodies received by a fake Ollama server
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Reserve a free loopback port. The listener is dropped before returning,
/// so there is a small window in which another process could take it.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    listener.local_addr().expect("No local addr").port()
}

/// Poll until something accepts connections on the port
pub async fn wait_until_listening(port: u16) {
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Nothing listening on port {}", port);
}

/// A URL nothing is listening on
pub fn unreachable_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Serve a fake Ollama whose generate and tags endpoints answer with
/// `status`, generate replying with `reply` as the completion text.
pub async fn spawn_fake_ollama(status: StatusCode, reply: &'static str) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let generate = warp::path!("api" / "generate")
        .and(warp::post())
        .and(warp::body::json())
        .map({
            let received = Arc::clone(&received);
            move |body: Value| {
                received.lock().unwrap().push(body.clone());
                let model = body["model"].as_str().unwrap_or_default().to_string();
                warp::reply::with_status(
                    warp::reply::json(&json!({
                        "model": model,
                        "response": reply,
                        "done": true
                    })),
                    status,
                )
            }
        });

    let tags = warp::path!("api" / "tags").and(warp::get()).map(move || {
        warp::reply::with_status(
            warp::reply::json(&json!({ "models": [{ "name": "llama3.2:1b" }] })),
            status,
        )
    });

    let port = free_port();
    tokio::spawn(warp::serve(generate.or(tags)).run(([127, 0, 0, 1], port)));
    wait_until_listening(port).await;

    (format!("http://127.0.0.1:{}", port), received)
}

/// Serve the relay against the given Ollama URL; returns the relay's base URL
pub async fn spawn_relay(ollama_url: &str) -> String {
    let config = AppConfig {
        ollama_url: ollama_url.to_string(),
        autostart: false,
        ..AppConfig::default()
    };
    let provider = create_provider(&config).expect("Failed to create provider");
    let routes = configure_routes(AppState::unsupervised(provider));

    let port = free_port();
    tokio::spawn(warp::serve(routes).run(([127, 0, 0, 1], port)));
    wait_until_listening(port).await;

    format!("http://127.0.0.1:{}", port)
}

pub async fn post_chat(base_url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/chat", base_url))
        .json(&body)
        .send()
        .await
        .expect("Relay request failed");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("Relay reply was not JSON");
    (status, body)
}

/// POST /chat with `Transfer-Encoding: chunked` and no `Content-Length`.
/// Written by hand so the body framing is exactly what is under test.
pub async fn post_chat_chunked(base_url: &str, body: Value) -> (u16, Value) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let addr = base_url.trim_start_matches("http://");
    let payload = body.to_string();
    let request = format!(
        "POST /chat HTTP/1.1\r\nHost: {}\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n{:x}\r\n{}\r\n0\r\n\r\n",
        addr,
        payload.len(),
        payload
    );

    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("Failed to connect to relay");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut raw = Vec::new();
    stream
        .read_to_end(&mut raw)
        .await
        .expect("Failed to read reply");
    let raw = String::from_utf8(raw).expect("Reply was not UTF-8");

    let (head, body) = raw.split_once("\r\n\r\n").expect("Malformed HTTP reply");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .expect("Missing status code");
    let body = serde_json::from_str(body).expect("Relay reply was not JSON");
    (status, body)
}
