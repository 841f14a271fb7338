use super::count_by;
use k8s_openapi::api::core::v1::Pod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const HEALTHY_PHASES: [&str; 2] = ["Running", "Succeeded"];
const UNKNOWN_PHASE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSummary {
    pub total_pods: usize,
    pub status_counts: BTreeMap<String, usize>,
    pub pods_by_namespace: BTreeMap<String, usize>,
    pub problem_pods: Vec<ProblemPod>,
}

/// A pod that is neither `Running` nor `Succeeded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemPod {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "status")]
    pub phase: String,
    pub reason: Option<String>,
    pub message: Option<String>,
}

impl PodSummary {
    pub fn from_pods(pods: &[Pod]) -> Self {
        Self {
            total_pods: pods.len(),
            status_counts: count_by(pods.iter().map(|pod| phase(pod).to_owned())),
            pods_by_namespace: count_by(pods.iter().map(namespace)),
            problem_pods: pods.iter().filter_map(ProblemPod::from_pod).collect(),
        }
    }
}

impl ProblemPod {
    fn from_pod(pod: &Pod) -> Option<Self> {
        let phase = phase(pod);
        if HEALTHY_PHASES.contains(&phase) {
            return None;
        }
        let status = pod.status.as_ref();
        Some(Self {
            name: pod.metadata.name.clone().unwrap_or_default(),
            namespace: namespace(pod),
            phase: phase.to_owned(),
            reason: status.and_then(|status| status.reason.clone()),
            message: status.and_then(|status| status.message.clone()),
        })
    }
}

fn phase(pod: &Pod) -> &str {
    pod.status
        .as_ref()
        .and_then(|status| status.phase.as_deref())
        .unwrap_or(UNKNOWN_PHASE)
}

fn namespace(pod: &Pod) -> String {
    pod.metadata.namespace.clone().unwrap_or_default()
}
