//! Liveness endpoint.

pub async fn health() -> &'static str {
    "OK"
}
