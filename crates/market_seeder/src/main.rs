//! Market seeder daemon entry point.
//!
//! Loads configuration, wires the component registry and command router,
//! registers the built-in auction house when configured, and runs the
//! seeding plugin until a shutdown signal arrives.

mod cli;
mod config;
mod signals;

use cli::CliArgs;
use config::{AppConfig, LoggingSettings};
use plugin_market_seeder::MarketSeederPlugin;
use seeder_host::{CommandRouter, ComponentRegistry, HostContext, Plugin, ServerHostContext};
use seeder_marketplace::AuctionHouse;
use signals::setup_signal_handlers;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging system
fn setup_logging(config: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = config.level.as_str();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);

    // try_init keeps a second initialization from panicking when the host
    // embedding this binary already installed a subscriber.
    if config.json_format {
        let _ = registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init();
    } else {
        let _ = registry
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init();
    }

    info!("Logging initialized with level: {}", log_level);
    Ok(())
}

/// Main application struct holding the wired host and plugin.
pub struct Application {
    config: AppConfig,
    context: Arc<dyn HostContext>,
    plugin: MarketSeederPlugin,
}

impl Application {
    /// Creates the application: load config, apply CLI overrides, wire the
    /// host context and plugin.
    pub async fn new(args: CliArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = AppConfig::load_from_file(&args.config_path).await?;

        if let Some(interval) = args.interval {
            config.seeding.interval = interval;
        }
        if let Some(log_level) = args.log_level {
            config.logging.level = log_level;
        }
        if args.json_logs {
            config.logging.json_format = true;
        }

        if let Err(e) = config.validate() {
            return Err(format!("Configuration validation failed: {}", e).into());
        }

        setup_logging(&config.logging)?;

        let registry = Arc::new(ComponentRegistry::new());
        let commands = Arc::new(CommandRouter::new());

        if config.marketplace.builtin {
            registry
                .register(Arc::new(AuctionHouse::new(config.marketplace.capacity)))
                .await?;
            info!("Registered built-in auction house component");
        }

        let context: Arc<dyn HostContext> =
            Arc::new(ServerHostContext::new(registry, commands));
        let plugin = MarketSeederPlugin::new(config.seeding.clone());

        info!(
            "Config: {} | Interval: {} minute(s) | Target component: {}",
            args.config_path.display(),
            config.seeding.interval,
            config.seeding.marketplace_component
        );

        Ok(Self {
            config,
            context,
            plugin,
        })
    }

    /// Runs the application until a shutdown signal arrives.
    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.plugin
            .on_init(self.context.clone())
            .await
            .map_err(|e| format!("Plugin initialization failed: {}", e))?;

        info!("Market seeder is running");
        info!(
            "Seeding every {} minute(s); press Ctrl+C to shut down",
            self.config.seeding.interval
        );

        setup_signal_handlers().await?;

        info!("Shutdown signal received, stopping seeder...");
        self.plugin
            .on_shutdown(self.context.clone())
            .await
            .map_err(|e| format!("Plugin shutdown failed: {}", e))?;

        info!("Market seeder shutdown complete");
        Ok(())
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    match Application::new(args).await {
        Ok(app) => {
            if let Err(e) = app.run().await {
                error!("Application error: {:?}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to start application: {:?}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
