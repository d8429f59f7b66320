//! HTTP serve command implementation

use std::sync::Arc;

use crate::{api::server::serve, dataset::Dataset};

/// Serve the JSON API on `host:port` until interrupted.
pub async fn handle_serve(dataset: Arc<Dataset>, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    println!("Server running on http://{}", addr);
    serve(&addr, dataset).await
}
