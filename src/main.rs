use clap::Parser;
use sleep_glance::domain::ports::{NoticeLength, Notifier, Screen};
use sleep_glance::utils::{logger, validation::Validate};
use sleep_glance::{CliConfig, ConsoleNotifier, ConsoleScreen, HttpHealthProvider, SleepReadFlow};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sleep-glance CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let provider = Arc::new(HttpHealthProvider::connect(&config));
    let notifier = Arc::new(ConsoleNotifier::new());
    let screen = ConsoleScreen::new();

    let flow = SleepReadFlow::new(provider, Arc::clone(&notifier));
    if let Err(e) = flow.start().await {
        // Not fatal: the screen stays up even when the service is unreachable.
        tracing::error!("❌ Permission request failed: {}", e);
        notifier.notify(
            &format!("Failed to request permissions: {}", e),
            NoticeLength::Long,
        );
    }

    screen.show(&format!("Hello {}!", config.display_name));

    tracing::info!("Press Ctrl-C to exit");
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    Ok(())
}
