use anyhow::Result;
use clap::Parser;
use cluster_audit::config::Config;
use cluster_audit::k8s::{resolve_client, KubeClusterApi};
use cluster_audit::{logging, report, ClusterAuditor};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = Config::parse();
    logging::init(&config);
    info!(environment = %config.environment(), "Starting cluster audit");

    let client = match resolve_client(config.context()).await {
        Ok(client) => client,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: Unable to load kubeconfig. Ensure kubectl is configured.");
            return Ok(ExitCode::FAILURE);
        }
    };

    let auditor = ClusterAuditor::new(
        KubeClusterApi::new(client),
        config.environment(),
        config.region(),
    );
    let result = auditor.run_full_audit().await;

    report::print_summary(&result);

    if config.should_save() {
        report::save_results(&result, config.output_dir()).await?;
    }

    Ok(match result.has_problems() {
        true => ExitCode::FAILURE,
        false => ExitCode::SUCCESS,
    })
}
