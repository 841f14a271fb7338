use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[clap(name = "cluster-audit", about = "EKS Cluster Audit Tool")]
pub struct Config {
    /// Environment to audit
    #[clap(long, env = "AUDIT_ENVIRONMENT", value_enum)]
    environment: Environment,

    /// AWS region
    #[clap(long, env = "AUDIT_REGION", default_value = "us-east-1")]
    region: String,

    /// Output directory for audit results
    #[clap(long, env = "AUDIT_OUTPUT_DIR", default_value = "../output")]
    output_dir: PathBuf,

    /// Do not save results to file
    #[clap(long)]
    no_save: bool,

    /// Kubeconfig context to use instead of the current one
    #[clap(long, env = "AUDIT_KUBE_CONTEXT")]
    context: Option<String>,

    /// Turn debug logs on
    #[clap(long)]
    debug: bool,

    /// Turn debug logs for all crates (not recommended)
    #[clap(long)]
    all_debug: bool,
}

impl Config {
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    pub fn should_save(&self) -> bool {
        !self.no_save
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.debug || self.all_debug {
            true => LevelFilter::DEBUG,
            false => LevelFilter::INFO,
        }
    }

    pub fn all_log_level(&self) -> LevelFilter {
        match self.all_debug {
            true => LevelFilter::DEBUG,
            false => LevelFilter::WARN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Stg,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Stg => "stg",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
