use axum::{Json, extract::Path};
use serde_json::{Value, json};

/// `GET /product/:id` — synthetic catalog entry embedding the path id.
///
/// Side-effect free; nothing is read from or written to the store.
pub async fn product_profile(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "name": "MSI",
        "price": "9.000.000",
    }))
}
