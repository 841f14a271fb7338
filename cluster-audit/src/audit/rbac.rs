use serde::{Deserialize, Serialize};

/// Totals only, RBAC objects aren't inspected individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacSummary {
    pub total_roles: usize,
    pub total_cluster_roles: usize,
    pub total_role_bindings: usize,
    pub total_cluster_role_bindings: usize,
}
