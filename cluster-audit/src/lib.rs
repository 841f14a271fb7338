pub mod audit;
pub mod config;
pub mod error;
pub mod k8s;
pub mod logging;
pub mod report;

pub use audit::ClusterAuditor;
pub use report::AuditResult;
