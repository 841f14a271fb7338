use k8s_openapi::api::core::v1::Namespace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSummary {
    pub total_namespaces: usize,
    pub namespaces: Vec<NamespaceInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceInfo {
    pub name: String,
    pub status: Option<String>,
    pub labels: BTreeMap<String, String>,
}

impl NamespaceSummary {
    pub fn from_namespaces(namespaces: &[Namespace]) -> Self {
        Self {
            total_namespaces: namespaces.len(),
            namespaces: namespaces.iter().map(NamespaceInfo::from).collect(),
        }
    }
}

impl From<&Namespace> for NamespaceInfo {
    fn from(namespace: &Namespace) -> Self {
        Self {
            name: namespace.metadata.name.clone().unwrap_or_default(),
            status: namespace
                .status
                .as_ref()
                .and_then(|status| status.phase.clone()),
            labels: namespace.metadata.labels.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use serde_json::json;

    #[test]
    fn test_namespace_info() {
        let namespaces: Vec<Namespace> = serde_json::from_value(json!([
            {
                "metadata": {
                    "name": "kube-system",
                    "labels": {"kubernetes.io/metadata.name": "kube-system"},
                },
                "status": {"phase": "Active"},
            },
            {
                "metadata": {"name": "old-feature"},
                "status": {"phase": "Terminating"},
            },
        ]))
        .unwrap();

        let summary = NamespaceSummary::from_namespaces(&namespaces);
        assert_eq!(summary.total_namespaces, 2);
        assert_eq!(
            summary.namespaces,
            vec![
                NamespaceInfo {
                    name: "kube-system".to_owned(),
                    status: Some("Active".to_owned()),
                    labels: btreemap! {
                        "kubernetes.io/metadata.name".to_owned() => "kube-system".to_owned(),
                    },
                },
                NamespaceInfo {
                    name: "old-feature".to_owned(),
                    status: Some("Terminating".to_owned()),
                    labels: BTreeMap::new(),
                },
            ]
        );
    }
}
