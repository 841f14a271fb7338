use super::AuditResult;
use crate::audit::BANNER;
use crate::config::Environment;
use crate::error::ReportError;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn report_file_name(environment: Environment, at: DateTime<Utc>) -> String {
    format!(
        "cluster-audit-{}-{}.json",
        environment,
        at.format("%Y%m%d-%H%M%S")
    )
}

/// Writes the report as indented JSON into `output_dir`, creating it when missing.
#[tracing::instrument(err, skip(result))]
pub async fn save_results(result: &AuditResult, output_dir: &Path) -> Result<PathBuf, ReportError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|err| ReportError::CreateDirError(output_dir.to_owned(), err))?;

    let path = output_dir.join(report_file_name(result.metadata.environment, Utc::now()));
    let contents = serde_json::to_vec_pretty(result)?;
    debug!(bytes = contents.len(), "writing report");
    tokio::fs::write(&path, contents)
        .await
        .map_err(|err| ReportError::WriteError(path.clone(), err))?;

    println!("\n{BANNER}");
    println!("Audit results saved to: {}", path.display());
    println!("{BANNER}\n");

    Ok(path)
}
