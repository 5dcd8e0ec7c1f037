use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness probe.
pub async fn home_handler() -> Json<Value> {
    Json(json!({ "message": "ML API running" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_reports_running() {
        let Json(body) = home_handler().await;
        assert_eq!(body, json!({ "message": "ML API running" }));
    }
}
