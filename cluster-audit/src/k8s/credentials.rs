use crate::error::CredentialsError;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::{debug, info};

/// Local kubeconfig first, in-cluster service account second.
#[tracing::instrument]
pub async fn resolve_client(context: Option<&str>) -> Result<kube::Client, CredentialsError> {
    let config = match kubeconfig(context).await {
        Ok(config) => {
            info!(cluster_url = %config.cluster_url, "Using local kubeconfig");
            config
        }
        Err(kubeconfig) => {
            debug!("Local kubeconfig unavailable ({kubeconfig}), trying in-cluster configuration");
            let config = kube::Config::incluster()
                .map_err(|incluster| CredentialsError::Unresolved {
                    kubeconfig,
                    incluster,
                })?;
            info!(cluster_url = %config.cluster_url, "Using in-cluster service account");
            config
        }
    };

    Ok(kube::Client::try_from(config)?)
}

async fn kubeconfig(
    context: Option<&str>,
) -> Result<kube::Config, kube::config::KubeconfigError> {
    let options = KubeConfigOptions {
        context: context.map(ToOwned::to_owned),
        ..Default::default()
    };
    let kubeconfig = Kubeconfig::read()?;
    kube::Config::from_custom_kubeconfig(kubeconfig, &options).await
}
