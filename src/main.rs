use color_eyre::eyre::Result;
use dotenv::dotenv;
use ministry_api::config::ApiConfig;
use ministry_backend::connection::ConnectionConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let connection = ConnectionConfig::from_env();

    // Start API server
    ministry_api::start_server(config, connection).await?;

    Ok(())
}
