use clap::Parser;
use pattern_catalog::app::demos::{self, adapter_demo, factory_demo, observer_demo, OutputFormat};
use pattern_catalog::utils::logger::{self, LogFormat};
use pattern_catalog::utils::validation::Validate;
use pattern_catalog::{CliConfig, DemoCommand, PatternError, ScenarioConfig, StdoutConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌：--json 時 log 也輸出為 JSON
    let log_format = if config.json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);

    tracing::info!("Starting pattern-catalog");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Demo run failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Demo run completed");
    Ok(())
}

fn run(config: &CliConfig) -> Result<(), PatternError> {
    config.validate()?;

    let scenario = match &config.scenario {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            ScenarioConfig::from_file(path)?
        }
        None => ScenarioConfig::default(),
    };
    scenario.validate()?;

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let console = StdoutConsole;

    match config.command() {
        DemoCommand::All => demos::run_all(&console, &scenario, format)?,
        DemoCommand::Adapter => adapter_demo::run(&console, &scenario.adapter),
        DemoCommand::Factory => {
            factory_demo::run(&console, &scenario.factory, format)?;
        }
        DemoCommand::Observer => {
            observer_demo::run(&console, &scenario.observer);
        }
    }

    Ok(())
}
