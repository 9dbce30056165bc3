use anyhow::Context;
use clap::Parser;
use sensor_relay::core::relay::EXIT_FAILURE;
use sensor_relay::utils::{logger, validation::Validate};
use sensor_relay::{exit_code, outcome_message, run_once, CliConfig, RelayConfig};

fn load_config(cli: &CliConfig) -> anyhow::Result<RelayConfig> {
    let config = match &cli.config {
        Some(path) => cli
            .resolve()
            .with_context(|| format!("loading config file {}", path.display()))?,
        None => cli.resolve().context("resolving command line flags")?,
    };
    config.validate().context("validating configuration")?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting sensor-relay");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };
    tracing::debug!(
        "Resolved config: sensor={}:{}{} cloud={} timeout={}s audit_log={:?}",
        config.sensor_host,
        config.sensor_port,
        config.sensor_path,
        config.cloud_endpoint,
        config.timeout_seconds,
        config.audit_log
    );

    let result = run_once(&config).await;

    println!("{}", outcome_message(&result));
    if let Err(e) = &result {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    }

    std::process::exit(exit_code(&result));
}
