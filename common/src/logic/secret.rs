use bootstrap_defs::SecretPayload;
use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;

pub fn build_secret(name: &str, namespace: &str, payload: &SecretPayload) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        string_data: Some(payload.as_map().clone()),
        ..Default::default()
    }
}
