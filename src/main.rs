use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use inventory_tracker::app_system::{setup_tracing, InventorySystem};
use inventory_tracker::command_loop::CommandLoop;
use inventory_tracker::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let config = Config::parse();
    setup_tracing(&config.log_level);

    info!("Starting inventory tracker");

    let system = InventorySystem::start(&config).await;

    let mut console = CommandLoop::new(
        system.inventory_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let session = console.run().await;
    drop(console);

    system.shutdown().await?;

    session.map_err(|e| {
        error!(error = %e, "Session ended with an error");
        e.to_string()
    })
}
