use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_core::slots::working_hours_label;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load and validate configuration
    let config = ApiConfig::from_env()?;
    println!(
        "Booking {} for {}",
        working_hours_label(&config.working_hours),
        config.initial_day
    );

    // Start API server
    slotbook_api::start_server(config).await?;

    Ok(())
}
