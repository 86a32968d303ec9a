use async_trait::async_trait;
use bootstrap_defs::{BootstrapError, SecretPayload};
use k8s_openapi::api::core::v1::Secret;
use kube::api::ApiResource;
use serde_json::Value;

/// The store secrets and resources are persisted to. Each call is a single
/// attempt; failures are handed back untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn create_secret(
        &self,
        name: &str,
        namespace: &str,
        payload: &SecretPayload,
    ) -> Result<Secret, BootstrapError>;

    /// Creates a namespaced custom resource and returns the raw response body.
    async fn create_resource(
        &self,
        api_resource: &ApiResource,
        namespace: &str,
        name: &str,
        body: &Value,
    ) -> Result<String, BootstrapError>;
}
