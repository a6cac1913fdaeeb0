//! remote-deploy CLI
//!
//! Triggers a deployment on a remote deploy service and follows it to
//! completion, as a GitHub Actions step or from a shell.
//!
//! Usage: remote-deploy [--remote-url URL] [--app-id ID] [--deploy-token TOKEN] ...
//!
//! Inputs not given as flags are read from `INPUT_<NAME>` variables.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use remote_deploy::presentation::{factory, Cli};
use remote_deploy::ui::blocks::header::CommandHeader;
use remote_deploy::ui::UiContext;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,remote_deploy=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json);
    let mut sink = factory::create_result_sink(&ui);

    // Input errors fail the step before any network call
    let config = match factory::load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            sink.set_failed(&err.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };

    init_tracing(config.verbose);

    if !ui.json {
        print!(
            "{}",
            CommandHeader::for_deploy(&config).render(ui.color, ui.unicode)
        );
    }

    let events = factory::create_event_sink(&ui, config.verbose);
    let use_case = match factory::create_deploy_use_case(&config, events) {
        Ok(use_case) => use_case,
        Err(err) => {
            sink.set_failed(&format!("Action failed: {err}"));
            return Ok(ExitCode::FAILURE);
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(use_case.run(&config, sink.as_mut()));

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
