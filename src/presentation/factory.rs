//! Use Case Factory
//!
//! Creates the use case and its sinks with infrastructure dependencies wired
//! up. This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::DeployConfig;
use crate::domain::ports::{DeployEventSink, ResultSink};
use crate::error::RemoteDeployResult;
use crate::infrastructure::{
    ActionInputs, ActionsResultSink, ConsoleEventSink, HttpDeployApi, JsonEventSink,
    JsonResultSink, LayeredInputs,
};
use crate::ui::UiContext;

use super::cli::Cli;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<HttpDeployApi>;

/// Load configuration from CLI flags layered over `INPUT_*` variables
pub fn load_config(cli: &Cli) -> RemoteDeployResult<DeployConfig> {
    let inputs = LayeredInputs::new(cli.input_overrides(), ActionInputs::from_env());
    DeployConfig::from_inputs(&inputs)
}

/// Create a deploy use case talking HTTP to the configured service
pub fn create_deploy_use_case(
    config: &DeployConfig,
    events: Arc<dyn DeployEventSink>,
) -> RemoteDeployResult<ConcreteDeployUseCase> {
    let api = HttpDeployApi::new(config)?;
    Ok(DeployUseCase::new(api).with_events(events))
}

/// NDJSON in `--json` mode, live console view otherwise
pub fn create_event_sink(ui: &UiContext, verbose: bool) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui, verbose))
    }
}

/// NDJSON in `--json` mode, `$GITHUB_OUTPUT` otherwise
pub fn create_result_sink(ui: &UiContext) -> Box<dyn ResultSink> {
    if ui.json {
        Box::new(JsonResultSink::stdout())
    } else {
        Box::new(ActionsResultSink::from_env())
    }
}
