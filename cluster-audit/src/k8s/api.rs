use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Node, Pod, Service};
use k8s_openapi::api::networking::v1::NetworkPolicy;
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, Role, RoleBinding};
use kube::api::{Api, ListParams};
use kube::Resource;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// Read-only list operations the audit needs from the control plane.
/// Namespaced kinds are listed across all namespaces.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn list_nodes(&self) -> kube::Result<Vec<Node>>;
    async fn list_pods(&self) -> kube::Result<Vec<Pod>>;
    async fn list_deployments(&self) -> kube::Result<Vec<Deployment>>;
    async fn list_services(&self) -> kube::Result<Vec<Service>>;
    async fn list_namespaces(&self) -> kube::Result<Vec<Namespace>>;
    async fn list_roles(&self) -> kube::Result<Vec<Role>>;
    async fn list_cluster_roles(&self) -> kube::Result<Vec<ClusterRole>>;
    async fn list_role_bindings(&self) -> kube::Result<Vec<RoleBinding>>;
    async fn list_cluster_role_bindings(&self) -> kube::Result<Vec<ClusterRoleBinding>>;
    async fn list_network_policies(&self) -> kube::Result<Vec<NetworkPolicy>>;
}

#[derive(Clone)]
pub struct KubeClusterApi {
    client: kube::Client,
}

impl KubeClusterApi {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    async fn list_all<K>(&self) -> kube::Result<Vec<K>>
    where
        K: Resource + Clone + DeserializeOwned + Debug,
        <K as Resource>::DynamicType: Default,
    {
        let items = Api::<K>::all(self.client.clone())
            .list(&ListParams::default())
            .await?
            .items;
        debug!(kind = %K::kind(&Default::default()), count = items.len(), "listed");
        Ok(items)
    }
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    async fn list_nodes(&self) -> kube::Result<Vec<Node>> {
        self.list_all().await
    }

    async fn list_pods(&self) -> kube::Result<Vec<Pod>> {
        self.list_all().await
    }

    async fn list_deployments(&self) -> kube::Result<Vec<Deployment>> {
        self.list_all().await
    }

    async fn list_services(&self) -> kube::Result<Vec<Service>> {
        self.list_all().await
    }

    async fn list_namespaces(&self) -> kube::Result<Vec<Namespace>> {
        self.list_all().await
    }

    async fn list_roles(&self) -> kube::Result<Vec<Role>> {
        self.list_all().await
    }

    async fn list_cluster_roles(&self) -> kube::Result<Vec<ClusterRole>> {
        self.list_all().await
    }

    async fn list_role_bindings(&self) -> kube::Result<Vec<RoleBinding>> {
        self.list_all().await
    }

    async fn list_cluster_role_bindings(&self) -> kube::Result<Vec<ClusterRoleBinding>> {
        self.list_all().await
    }

    async fn list_network_policies(&self) -> kube::Result<Vec<NetworkPolicy>> {
        self.list_all().await
    }
}
