mod deployments;
mod namespaces;
mod network_policies;
mod nodes;
mod pods;
mod rbac;
mod services;

pub use deployments::{DeploymentSummary, UnhealthyDeployment};
pub use namespaces::{NamespaceInfo, NamespaceSummary};
pub use network_policies::NetworkPolicySummary;
pub use nodes::{NodeInfo, NodeReadiness, NodeResources, NodeSummary};
pub use pods::{PodSummary, ProblemPod};
pub use rbac::RbacSummary;
pub use services::ServiceSummary;

use crate::config::Environment;
use crate::k8s::ClusterApi;
use crate::report::{AuditResult, CategoryOutcome, Metadata};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

pub const BANNER: &str = "============================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Nodes,
    Pods,
    Deployments,
    Services,
    Namespaces,
    Rbac,
    NetworkPolicies,
}

impl Category {
    /// Key of the category in the JSON report.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Pods => "pods",
            Self::Deployments => "deployments",
            Self::Services => "services",
            Self::Namespaces => "namespaces",
            Self::Rbac => "rbac",
            Self::NetworkPolicies => "network_policies",
        }
    }

    /// Human-readable name, as used in progress lines and error messages.
    pub fn label(&self) -> String {
        match self {
            Self::Rbac => "RBAC".to_owned(),
            _ => self.key().replace('_', " "),
        }
    }

    pub fn progress_line(&self) -> String {
        match self {
            Self::Nodes | Self::Pods => format!("Auditing cluster {}...", self.label()),
            _ => format!("Auditing {}...", self.label()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub struct ClusterAuditor<C> {
    api: C,
    environment: Environment,
    region: String,
    timestamp: DateTime<Utc>,
}

impl<C: ClusterApi> ClusterAuditor<C> {
    pub fn new(api: C, environment: Environment, region: impl Into<String>) -> Self {
        Self {
            api,
            environment,
            region: region.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_nodes(&self) -> CategoryOutcome<NodeSummary> {
        let result = self.api.list_nodes().await;
        CategoryOutcome::from_result(
            Category::Nodes,
            result.map(|nodes| NodeSummary::from_nodes(&nodes)),
        )
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_pods(&self) -> CategoryOutcome<PodSummary> {
        let result = self.api.list_pods().await;
        CategoryOutcome::from_result(
            Category::Pods,
            result.map(|pods| PodSummary::from_pods(&pods)),
        )
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_deployments(&self) -> CategoryOutcome<DeploymentSummary> {
        let result = self.api.list_deployments().await;
        CategoryOutcome::from_result(
            Category::Deployments,
            result.map(|deployments| DeploymentSummary::from_deployments(&deployments)),
        )
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_services(&self) -> CategoryOutcome<ServiceSummary> {
        let result = self.api.list_services().await;
        CategoryOutcome::from_result(
            Category::Services,
            result.map(|services| ServiceSummary::from_services(&services)),
        )
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_namespaces(&self) -> CategoryOutcome<NamespaceSummary> {
        let result = self.api.list_namespaces().await;
        CategoryOutcome::from_result(
            Category::Namespaces,
            result.map(|namespaces| NamespaceSummary::from_namespaces(&namespaces)),
        )
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_rbac(&self) -> CategoryOutcome<RbacSummary> {
        let result = async {
            Ok::<_, kube::Error>(RbacSummary {
                total_roles: self.api.list_roles().await?.len(),
                total_cluster_roles: self.api.list_cluster_roles().await?.len(),
                total_role_bindings: self.api.list_role_bindings().await?.len(),
                total_cluster_role_bindings: self.api.list_cluster_role_bindings().await?.len(),
            })
        }
        .await;
        CategoryOutcome::from_result(Category::Rbac, result)
    }

    #[tracing::instrument(skip_all)]
    pub async fn audit_network_policies(&self) -> CategoryOutcome<NetworkPolicySummary> {
        let result = self.api.list_network_policies().await;
        CategoryOutcome::from_result(
            Category::NetworkPolicies,
            result.map(|policies| NetworkPolicySummary::from_network_policies(&policies)),
        )
    }

    pub async fn run_full_audit(&self) -> AuditResult {
        self.run_full_audit_to(&mut io::stdout()).await
    }

    /// Runs every audit in order, writing the banner and a progress line
    /// before each category to `out`.
    #[tracing::instrument(skip_all, fields(environment = %self.environment))]
    pub async fn run_full_audit_to<W: Write>(&self, out: &mut W) -> AuditResult {
        report_progress(
            out,
            format_args!(
                "\n{BANNER}\nStarting EKS Cluster Audit - {}\nTimestamp: {}\n{BANNER}\n",
                self.environment,
                self.timestamp.to_rfc3339()
            ),
        );

        let metadata = Metadata {
            environment: self.environment,
            region: self.region.clone(),
            timestamp: self.timestamp,
        };

        report_progress(out, Category::Nodes.progress_line());
        let nodes = self.audit_nodes().await;
        report_progress(out, Category::Pods.progress_line());
        let pods = self.audit_pods().await;
        report_progress(out, Category::Deployments.progress_line());
        let deployments = self.audit_deployments().await;
        report_progress(out, Category::Services.progress_line());
        let services = self.audit_services().await;
        report_progress(out, Category::Namespaces.progress_line());
        let namespaces = self.audit_namespaces().await;
        report_progress(out, Category::Rbac.progress_line());
        let rbac = self.audit_rbac().await;
        report_progress(out, Category::NetworkPolicies.progress_line());
        let network_policies = self.audit_network_policies().await;

        let result = AuditResult {
            metadata,
            nodes,
            pods,
            deployments,
            services,
            namespaces,
            rbac,
            network_policies,
        };

        tracing::debug!(failed = ?result.failed_categories(), "audit finished");
        result
    }
}

/// Best effort, like `print_summary`.
fn report_progress<W: Write>(out: &mut W, line: impl fmt::Display) {
    if let Err(err) = writeln!(out, "{line}") {
        tracing::warn!("Failed writing progress: {err}");
    }
}

/// Occurrences per key, ordered by key.
pub(crate) fn count_by<I>(keys: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter().counts().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;

    #[test]
    fn test_progress_lines() {
        assert_eq!(Category::Nodes.progress_line(), "Auditing cluster nodes...");
        assert_eq!(Category::Pods.progress_line(), "Auditing cluster pods...");
        assert_eq!(Category::Rbac.progress_line(), "Auditing RBAC...");
        assert_eq!(
            Category::NetworkPolicies.progress_line(),
            "Auditing network policies..."
        );
    }

    #[test]
    fn test_category_display_matches_report_keys() {
        assert_eq!(Category::NetworkPolicies.to_string(), "network_policies");
        assert_eq!(Category::Rbac.to_string(), "rbac");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::NetworkPolicies.label(), "network policies");
        assert_eq!(Category::Rbac.label(), "RBAC");
        assert_eq!(Category::Deployments.label(), "deployments");
    }

    #[test]
    fn test_count_by() {
        let counts = count_by(["b", "a", "b"].map(ToOwned::to_owned));
        assert_eq!(counts, btreemap! {"a".to_owned() => 1, "b".to_owned() => 2});
    }
}
