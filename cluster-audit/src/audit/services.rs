use super::count_by;
use k8s_openapi::api::core::v1::Service;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type the API server assigns when a service doesn't specify one.
const DEFAULT_SERVICE_TYPE: &str = "ClusterIP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub total_services: usize,
    pub service_types: BTreeMap<String, usize>,
    pub services_by_namespace: BTreeMap<String, usize>,
}

impl ServiceSummary {
    pub fn from_services(services: &[Service]) -> Self {
        Self {
            total_services: services.len(),
            service_types: count_by(services.iter().map(|service| {
                service
                    .spec
                    .as_ref()
                    .and_then(|spec| spec.type_.clone())
                    .unwrap_or_else(|| DEFAULT_SERVICE_TYPE.to_owned())
            })),
            services_by_namespace: count_by(
                services
                    .iter()
                    .map(|service| service.metadata.namespace.clone().unwrap_or_default()),
            ),
        }
    }
}
