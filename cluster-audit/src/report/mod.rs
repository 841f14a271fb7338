mod output;
mod summary;

pub use output::{report_file_name, save_results};
pub use summary::{print_summary, write_summary};

use crate::audit::{
    Category, DeploymentSummary, NamespaceSummary, NetworkPolicySummary, NodeSummary, PodSummary,
    RbacSummary, ServiceSummary,
};
use crate::config::Environment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub metadata: Metadata,
    pub nodes: CategoryOutcome<NodeSummary>,
    pub pods: CategoryOutcome<PodSummary>,
    pub deployments: CategoryOutcome<DeploymentSummary>,
    pub services: CategoryOutcome<ServiceSummary>,
    pub namespaces: CategoryOutcome<NamespaceSummary>,
    pub rbac: CategoryOutcome<RbacSummary>,
    pub network_policies: CategoryOutcome<NetworkPolicySummary>,
}

impl AuditResult {
    /// Problem pods or unhealthy deployments. Failed categories don't count.
    pub fn has_problems(&self) -> bool {
        let problem_pods = self
            .pods
            .summary()
            .is_some_and(|pods| !pods.problem_pods.is_empty());
        let unhealthy_deployments = self
            .deployments
            .summary()
            .is_some_and(|deployments| !deployments.unhealthy_deployments.is_empty());
        problem_pods || unhealthy_deployments
    }

    pub fn failed_categories(&self) -> Vec<Category> {
        [
            (Category::Nodes, self.nodes.is_failed()),
            (Category::Pods, self.pods.is_failed()),
            (Category::Deployments, self.deployments.is_failed()),
            (Category::Services, self.services.is_failed()),
            (Category::Namespaces, self.namespaces.is_failed()),
            (Category::Rbac, self.rbac.is_failed()),
            (Category::NetworkPolicies, self.network_policies.is_failed()),
        ]
        .into_iter()
        .filter_map(|(category, failed)| failed.then_some(category))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub environment: Environment,
    pub region: String,
    pub timestamp: DateTime<Utc>,
}

/// Either the populated summary of a category or the reason it couldn't be
/// produced. Untagged, so a failure shows up in JSON as `{"error": ..., "kind": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryOutcome<T> {
    Audited(T),
    Failed(CategoryError),
}

impl<T> CategoryOutcome<T> {
    pub fn from_result(category: Category, result: kube::Result<T>) -> Self {
        match result {
            Ok(summary) => Self::Audited(summary),
            Err(err) => {
                let error = CategoryError::new(category, &err);
                tracing::error!(%category, kind = ?error.kind, "{}", error.error);
                Self::Failed(error)
            }
        }
    }

    pub fn summary(&self) -> Option<&T> {
        match self {
            Self::Audited(summary) => Some(summary),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CategoryError> {
        match self {
            Self::Audited(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryError {
    pub error: String,
    pub kind: CategoryErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl CategoryError {
    pub fn new(category: Category, err: &kube::Error) -> Self {
        let (kind, code) = match err {
            kube::Error::Api(response) => (CategoryErrorKind::Api, Some(response.code)),
            kube::Error::Auth(_) => (CategoryErrorKind::Unauthenticated, None),
            kube::Error::SerdeError(_) => (CategoryErrorKind::Decode, None),
            _ => (CategoryErrorKind::Client, None),
        };
        Self {
            error: format!("Failed to audit {}: {}", category.label(), err),
            kind,
            code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryErrorKind {
    /// The control plane answered with a failure status
    Api,
    Unauthenticated,
    Decode,
    Client,
}
