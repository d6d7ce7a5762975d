use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todoserv_observability::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todo.db".to_string());
    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| {
        tracing::warn!("API_KEY not set; using insecure dev default");
        "dev-api-key".to_string()
    });
    let listen_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store = todoserv_store::Store::connect(&database_url)
        .await
        .with_context(|| format!("failed to open database at {database_url}"))?;

    let app = todoserv_api::app::build_app(store, api_key);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
