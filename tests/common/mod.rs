#![allow(dead_code)]

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize test tracing output once per binary.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Spawn a mock server on an ephemeral port that answers exactly one request
/// with the given status, content type, and body. Returns the base URL.
pub fn serve_once(status: u16, content_type: &'static str, body: String) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("failed to bind mock server");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("mock server has a TCP address");
    std::thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes())
                    .expect("valid content-type header");
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
    });
    format!("http://{addr}")
}
