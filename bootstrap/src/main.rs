use bootstrap_common::{provision, DryRunSubmissionClient, KubeSubmissionClient, SubmissionClient};
use bootstrap_utils::{resolve_app_config, setup_logging};
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

mod args;

use args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize rustls crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    setup_logging()?;

    let args = Args::parse();
    let config = resolve_app_config(args.clowder_config.as_deref())?;

    let client: Box<dyn SubmissionClient> = if args.dry_run {
        info!("Starting in DRY-RUN mode, nothing will be submitted");
        Box::new(DryRunSubmissionClient)
    } else {
        Box::new(KubeSubmissionClient::try_default().await?)
    };

    let report = provision(
        client.as_ref(),
        &config,
        &args.resource_names(),
        &args.translation_defaults(),
    )
    .await;

    if report.is_success() {
        info!("Provisioned Pulp {} in namespace {}", args.cr_name, args.namespace);
        Ok(ExitCode::SUCCESS)
    } else {
        let failed: Vec<String> = report
            .failures()
            .map(|outcome| format!("{} {}", outcome.step, outcome.name))
            .collect();
        error!("Provisioning incomplete, failed steps: {}", failed.join(", "));
        Ok(ExitCode::FAILURE)
    }
}
