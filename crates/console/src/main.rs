use anyhow::{Context, Result};
use console::config::Config;
use console::frontend;
use console::state::AppState;
use dotenv::dotenv;
use shared::utils::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // The prompt owns the terminal, so tracing stays quiet unless
    // RUST_LOG turns it on.
    init_logger("off");

    let config = Config::init();
    let state = AppState::new(&config).await?;

    println!("🛒 Product console connected to {}", config.product_addr);

    frontend::run(state).await.context("Console loop failed")
}
