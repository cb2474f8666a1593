//! Binary entrypoint for the Veriflow API server.
use veriflow_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with VERIFLOW_ADDR
    let addr = std::env::var("VERIFLOW_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    run(&addr).await;
}
