use super::count_by;
use k8s_openapi::api::networking::v1::NetworkPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPolicySummary {
    pub total_network_policies: usize,
    pub policies_by_namespace: BTreeMap<String, usize>,
}

impl NetworkPolicySummary {
    pub fn from_network_policies(policies: &[NetworkPolicy]) -> Self {
        Self {
            total_network_policies: policies.len(),
            policies_by_namespace: count_by(
                policies
                    .iter()
                    .map(|policy| policy.metadata.namespace.clone().unwrap_or_default()),
            ),
        }
    }
}
