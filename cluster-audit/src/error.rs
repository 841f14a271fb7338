#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("Unable to load kubeconfig ({kubeconfig}) or in-cluster configuration ({incluster})")]
    Unresolved {
        kubeconfig: kube::config::KubeconfigError,
        incluster: kube::config::InClusterError,
    },

    #[error("Failed building Kubernetes client: {0}")]
    ClientBuildError(#[from] kube::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed creating output directory {0}: {1}")]
    CreateDirError(std::path::PathBuf, std::io::Error),

    #[error("Failed writing audit results to {0}: {1}")]
    WriteError(std::path::PathBuf, std::io::Error),

    #[error("Failed encoding audit results: {0}")]
    EncodeError(#[from] serde_json::Error),
}
