use async_trait::async_trait;
use bootstrap_defs::{BootstrapError, SecretPayload};
use k8s_openapi::api::core::v1::Secret;
use kube::api::ApiResource;
use log::info;
use serde_json::Value;

use crate::interface::SubmissionClient;
use crate::logic::build_secret;

/// Prints the manifests that would be submitted instead of talking to a cluster.
pub struct DryRunSubmissionClient;

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String, BootstrapError> {
    serde_yaml::to_string(value).map_err(|e| BootstrapError::Encoding(e.to_string()))
}

#[async_trait]
impl SubmissionClient for DryRunSubmissionClient {
    async fn create_secret(
        &self,
        name: &str,
        namespace: &str,
        payload: &SecretPayload,
    ) -> Result<Secret, BootstrapError> {
        let secret = build_secret(name, namespace, payload);
        info!("[dry-run] Secret {}/{}:\n{}", namespace, name, to_yaml(&secret)?);
        Ok(secret)
    }

    async fn create_resource(
        &self,
        api_resource: &ApiResource,
        namespace: &str,
        name: &str,
        body: &Value,
    ) -> Result<String, BootstrapError> {
        info!(
            "[dry-run] {} {}/{}:\n{}",
            api_resource.kind,
            namespace,
            name,
            to_yaml(body)?
        );
        serde_json::to_string(body).map_err(|e| BootstrapError::Encoding(e.to_string()))
    }
}
