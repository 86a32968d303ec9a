use async_trait::async_trait;
use bootstrap_defs::{BootstrapError, SecretPayload};
use k8s_openapi::api::core::v1::Secret;
use kube::api::{Api, ApiResource, DynamicObject, PostParams};
use kube::Client as KubeClient;
use log::debug;
use serde_json::Value;

use crate::interface::SubmissionClient;
use crate::logic::build_secret;

pub struct KubeSubmissionClient {
    client: KubeClient,
}

impl KubeSubmissionClient {
    pub fn new(client: KubeClient) -> Self {
        KubeSubmissionClient { client }
    }

    /// Uses the in-cluster config or the local kubeconfig, whichever is found.
    pub async fn try_default() -> Result<Self, kube::Error> {
        Ok(Self::new(KubeClient::try_default().await?))
    }
}

fn submission_error(kind: &str, name: &str, error: kube::Error) -> BootstrapError {
    let body = match &error {
        kube::Error::Api(response) => serde_json::to_string(response).ok(),
        _ => None,
    };
    BootstrapError::Submission {
        kind: kind.to_string(),
        name: name.to_string(),
        message: error.to_string(),
        body,
    }
}

#[async_trait]
impl SubmissionClient for KubeSubmissionClient {
    async fn create_secret(
        &self,
        name: &str,
        namespace: &str,
        payload: &SecretPayload,
    ) -> Result<Secret, BootstrapError> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = build_secret(name, namespace, payload);

        debug!("Creating secret {}/{}", namespace, name);
        api.create(&PostParams::default(), &secret)
            .await
            .map_err(|e| submission_error("Secret", name, e))
    }

    async fn create_resource(
        &self,
        api_resource: &ApiResource,
        namespace: &str,
        name: &str,
        body: &Value,
    ) -> Result<String, BootstrapError> {
        let mut object: DynamicObject = serde_json::from_value(body.clone())
            .map_err(|e| BootstrapError::Encoding(e.to_string()))?;
        object.metadata.name = Some(name.to_string());

        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, api_resource);

        debug!(
            "Creating {} {}/{} ({})",
            api_resource.kind, namespace, name, api_resource.api_version
        );
        let created = api
            .create(&PostParams::default(), &object)
            .await
            .map_err(|e| submission_error(&api_resource.kind, name, e))?;

        serde_json::to_string(&created).map_err(|e| BootstrapError::Encoding(e.to_string()))
    }
}
