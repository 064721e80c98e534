pub mod scenario;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-catalog")]
#[command(about = "Runs the Adapter, Factory and Observer pattern demos")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<DemoCommand>,

    #[arg(long, global = true, help = "TOML scenario overriding the built-in sample data")]
    pub scenario: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print factory results and logs as JSON lines")]
    pub json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum DemoCommand {
    /// Run every demo in order
    All,
    /// Payment processing through a direct gateway and an adapter
    Adapter,
    /// Medication factory
    Factory,
    /// Online shop notifying its customers
    Observer,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn command(&self) -> DemoCommand {
        self.command.unwrap_or(DemoCommand::All)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validate_path("scenario", path)?;
        }
        Ok(())
    }
}
