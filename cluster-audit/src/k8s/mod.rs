mod api;
mod credentials;

pub use api::{ClusterApi, KubeClusterApi};
pub use credentials::resolve_client;
