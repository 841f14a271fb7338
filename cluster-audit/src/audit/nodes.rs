use k8s_openapi::api::core::v1::Node;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ROLE_LABEL: &str = "kubernetes.io/role";
const INSTANCE_TYPE_LABEL: &str = "node.kubernetes.io/instance-type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub total_nodes: usize,
    pub ready_nodes: usize,
    pub nodes: Vec<NodeInfo>,
}

impl NodeSummary {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let nodes: Vec<NodeInfo> = nodes.iter().map(NodeInfo::from).collect();
        Self {
            total_nodes: nodes.len(),
            ready_nodes: nodes
                .iter()
                .filter(|node| node.status == NodeReadiness::Ready)
                .count(),
            nodes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeReadiness {
    Ready,
    NotReady,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub name: String,
    pub status: NodeReadiness,
    pub role: String,
    pub instance_type: String,
    pub os_image: Option<String>,
    pub kubelet_version: Option<String>,
    pub capacity: NodeResources,
    pub allocatable: NodeResources,
    /// Condition type to condition status, e.g. `Ready => "True"`
    pub conditions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeResources {
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub pods: Option<String>,
}

impl NodeResources {
    fn from_quantities(quantities: Option<&BTreeMap<String, Quantity>>) -> Self {
        let get = |key: &str| {
            quantities
                .and_then(|quantities| quantities.get(key))
                .map(|quantity| quantity.0.clone())
        };
        Self {
            cpu: get("cpu"),
            memory: get("memory"),
            pods: get("pods"),
        }
    }
}

impl From<&Node> for NodeInfo {
    fn from(node: &Node) -> Self {
        let labels = node.metadata.labels.as_ref();
        let label = |key: &str, default: &str| {
            labels
                .and_then(|labels| labels.get(key))
                .cloned()
                .unwrap_or_else(|| default.to_owned())
        };

        let status = node.status.as_ref();
        let conditions: BTreeMap<String, String> = status
            .and_then(|status| status.conditions.as_ref())
            .into_iter()
            .flatten()
            .map(|condition| (condition.type_.clone(), condition.status.clone()))
            .collect();
        let node_info = status.and_then(|status| status.node_info.as_ref());

        Self {
            name: node.metadata.name.clone().unwrap_or_default(),
            status: match conditions.get("Ready").map(String::as_str) {
                Some("True") => NodeReadiness::Ready,
                _ => NodeReadiness::NotReady,
            },
            role: label(ROLE_LABEL, "worker"),
            instance_type: label(INSTANCE_TYPE_LABEL, "unknown"),
            os_image: node_info.map(|info| info.os_image.clone()),
            kubelet_version: node_info.map(|info| info.kubelet_version.clone()),
            capacity: NodeResources::from_quantities(
                status.and_then(|status| status.capacity.as_ref()),
            ),
            allocatable: NodeResources::from_quantities(
                status.and_then(|status| status.allocatable.as_ref()),
            ),
            conditions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use serde_json::json;

    fn node(name: &str, ready: &str, labels: serde_json::Value) -> Node {
        serde_json::from_value(json!({
            "metadata": {"name": name, "labels": labels},
            "status": {
                "conditions": [
                    {"type": "MemoryPressure", "status": "False"},
                    {"type": "Ready", "status": ready},
                ],
                "nodeInfo": {
                    "architecture": "amd64",
                    "bootID": "",
                    "containerRuntimeVersion": "containerd://1.7.11",
                    "kernelVersion": "5.10.210",
                    "kubeProxyVersion": "v1.29.0",
                    "kubeletVersion": "v1.29.0-eks-5e0fdde",
                    "machineID": "",
                    "operatingSystem": "linux",
                    "osImage": "Amazon Linux 2",
                    "systemUUID": "",
                },
                "capacity": {"cpu": "2", "memory": "7936952Ki", "pods": "29"},
                "allocatable": {"cpu": "1930m", "memory": "7246776Ki", "pods": "29"},
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_node_info() {
        let info = NodeInfo::from(&node(
            "ip-10-0-1-12.ec2.internal",
            "True",
            json!({
                "kubernetes.io/role": "infra",
                "node.kubernetes.io/instance-type": "m5.large",
            }),
        ));
        assert_eq!(info.name, "ip-10-0-1-12.ec2.internal");
        assert_eq!(info.status, NodeReadiness::Ready);
        assert_eq!(info.role, "infra");
        assert_eq!(info.instance_type, "m5.large");
        assert_eq!(info.os_image.as_deref(), Some("Amazon Linux 2"));
        assert_eq!(info.kubelet_version.as_deref(), Some("v1.29.0-eks-5e0fdde"));
        assert_eq!(info.capacity.cpu.as_deref(), Some("2"));
        assert_eq!(info.allocatable.cpu.as_deref(), Some("1930m"));
        assert_eq!(info.allocatable.pods.as_deref(), Some("29"));
        assert_eq!(
            info.conditions,
            btreemap! {
                "MemoryPressure".to_owned() => "False".to_owned(),
                "Ready".to_owned() => "True".to_owned(),
            }
        );
    }

    #[test]
    fn test_label_defaults() {
        let info = NodeInfo::from(&node("a", "True", json!({})));
        assert_eq!(info.role, "worker");
        assert_eq!(info.instance_type, "unknown");
    }

    #[test]
    fn test_readiness_requires_literal_true() {
        for status in ["False", "Unknown", "true"] {
            let info = NodeInfo::from(&node("a", status, json!({})));
            assert_eq!(info.status, NodeReadiness::NotReady, "status {status}");
        }
    }

    #[test]
    fn test_node_without_status() {
        let bare: Node = serde_json::from_value(json!({"metadata": {"name": "bare"}})).unwrap();
        let info = NodeInfo::from(&bare);
        assert_eq!(info.status, NodeReadiness::NotReady);
        assert_eq!(info.os_image, None);
        assert_eq!(info.capacity, NodeResources::default());
        assert!(info.conditions.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let summary = NodeSummary::from_nodes(&[
            node("a", "True", json!({})),
            node("b", "False", json!({})),
            node("c", "True", json!({})),
        ]);
        assert_eq!(summary.total_nodes, 3);
        assert_eq!(summary.ready_nodes, 2);
        assert_eq!(summary.nodes.len(), summary.total_nodes);
        assert_eq!(summary.nodes[1].status, NodeReadiness::NotReady);
    }

    #[test]
    fn test_readiness_serializes_verbatim() {
        assert_eq!(
            serde_json::to_value(NodeReadiness::NotReady).unwrap(),
            json!("NotReady")
        );
    }
}
