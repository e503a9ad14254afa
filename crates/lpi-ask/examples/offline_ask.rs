//! Answer a few questions against an in-memory table.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p lpi-ask --example offline_ask

use std::sync::Arc;

use lpi_ask::{AskConfig, AskService};
use lpi_core::raw_row;
use mock_source::{MemoryStore, StaticTranslator};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AskConfig::from_env()?;
    let all_path = format!("/rest/v1/{}?select=*", config.table);

    let store = MemoryStore::new(vec![
        raw_row("Singapore", "Asia", "4.3"),
        raw_row("SINGAPORE", "Asia", "3.0"),
        raw_row("Vietnam", "Asia", "3.27"),
        raw_row("Viet Nam", "Asia", "three point two five"),
        raw_row("Germany", "Europe", "FOUR POINT ONE"),
        raw_row("Finland", "Europe", json!(4.1)),
        raw_row("Chile", "Americas", "unknown"),
    ]);
    let translator = StaticTranslator::new(all_path);
    let service = AskService::new(config, Arc::new(translator), Arc::new(store));

    for question in [
        "top 5 countries",
        "average score by region",
        "countries above 3.5",
        "前五名",
    ] {
        let answer = service.ask(question).await?;
        println!("{}\n  {}", question, answer.to_json()?);
    }

    Ok(())
}
