pub mod adapter_demo;
pub mod factory_demo;
pub mod observer_demo;

use crate::config::scenario::ScenarioConfig;
use crate::core::Console;
use crate::utils::error::Result;

/// How factory results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runs adapter, factory and observer demos in that order. A factory error
/// stops the run before the observer demo.
pub fn run_all<C>(console: &C, scenario: &ScenarioConfig, format: OutputFormat) -> Result<()>
where
    C: Console + Clone + 'static,
{
    adapter_demo::run(console, &scenario.adapter);
    factory_demo::run(console, &scenario.factory, format)?;
    observer_demo::run(console, &scenario.observer);
    Ok(())
}
