use k8s_openapi::api::apps::v1::Deployment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentSummary {
    pub total_deployments: usize,
    pub healthy_deployments: usize,
    pub unhealthy_deployments: Vec<UnhealthyDeployment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnhealthyDeployment {
    pub name: String,
    pub namespace: String,
    pub replicas: i32,
    pub ready: i32,
    pub available: i32,
    pub healthy: bool,
}

impl DeploymentSummary {
    pub fn from_deployments(deployments: &[Deployment]) -> Self {
        let (healthy, unhealthy): (Vec<_>, Vec<_>) = deployments
            .iter()
            .map(UnhealthyDeployment::from)
            .partition(|deployment| deployment.healthy);

        Self {
            total_deployments: deployments.len(),
            healthy_deployments: healthy.len(),
            unhealthy_deployments: unhealthy,
        }
    }
}

impl From<&Deployment> for UnhealthyDeployment {
    fn from(deployment: &Deployment) -> Self {
        let status = deployment.status.as_ref();
        let replicas = status.and_then(|s| s.replicas).unwrap_or(0);
        let ready = status.and_then(|s| s.ready_replicas).unwrap_or(0);
        let available = status.and_then(|s| s.available_replicas).unwrap_or(0);

        Self {
            name: deployment.metadata.name.clone().unwrap_or_default(),
            namespace: deployment.metadata.namespace.clone().unwrap_or_default(),
            replicas,
            ready,
            available,
            healthy: ready == replicas && available == replicas,
        }
    }
}
