//! ficbridge - command-line host for Fatture in Cloud batches

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ficbridge_app::cli::{Cli, Command};
use ficbridge_app::context::{resolve_config, AppContext};
use ficbridge_app::{
    credential_source, describe_schema, list_resources, load_batch, oauth_settings, run_batch,
};
use ficbridge_core::DispatchError;
use ficbridge_domain::FailurePolicy;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // .env is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = resolve_config(cli.config).context("failed to load configuration")?;
    ficbridge_infra::init_tracing(&config.logging).context("failed to initialize logging")?;

    match cli.command {
        Command::Resources => print_json(&list_resources()),
        Command::Describe { resource } => print_json(&describe_schema(resource.as_deref())?),
        Command::Oauth => print_json(&oauth_settings()),
        Command::Run { batch, credentials, continue_on_fail } => {
            let ctx = AppContext::new_with_config(config)?;

            let mut request = load_batch(&batch).await?;
            if continue_on_fail {
                request.failure_policy = Some(FailurePolicy::Continue);
            }

            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("Interrupt received, stopping after the current item");
                    on_signal.cancel();
                }
            });

            let outcome =
                run_batch(&ctx, request, credential_source(credentials.as_deref()), &cancel).await;

            match outcome {
                Ok(report) => print_json(&report),
                Err(DispatchError::Aborted { index, error, completed }) => {
                    print_json(&completed)?;
                    Err(anyhow::Error::new(error).context(format!("item {index} failed")))
                }
                Err(err @ DispatchError::Rejected(_)) => Err(err.into()),
            }
        }
    }
}

#[allow(clippy::print_stderr)]
fn report_failure(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
