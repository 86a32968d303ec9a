use bootstrap_defs::{
    BootstrapError, Cache, Database, ObjectStoreConfig, Pulp, PulpSpec, TranslationDefaults,
    PULP_SETTINGS_S3_ENDPOINT_KEY, TLS_ENDPOINT_SCHEME,
};
use kube::api::ApiResource;
use serde_json::{Map, Value};

/// Where everything ends up: the namespace, the Pulp resource name and the names
/// of the three secrets it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub namespace: String,
    pub resource_name: String,
    pub database_secret: String,
    pub cache_secret: String,
    pub object_store_secret: String,
}

pub fn pulp_api_resource() -> ApiResource {
    ApiResource::erase::<Pulp>(&())
}

/// Settings blob pointing Pulp's S3 storage backend at the object store.
///
/// A binding that declares TLS always gets https; otherwise the default scheme applies.
pub fn pulp_settings(object_store: &ObjectStoreConfig, defaults: &TranslationDefaults) -> Value {
    let scheme = if object_store.tls {
        TLS_ENDPOINT_SCHEME
    } else {
        defaults.endpoint_scheme.as_str()
    };

    let mut settings = Map::new();
    settings.insert(
        PULP_SETTINGS_S3_ENDPOINT_KEY.to_string(),
        Value::String(format!("{}://{}", scheme, object_store.hostname)),
    );
    Value::Object(settings)
}

/// Builds the Pulp resource. Secrets are referenced by name, credentials never
/// end up in the resource itself.
pub fn assemble_pulp(
    names: &ResourceNames,
    object_store: &ObjectStoreConfig,
    defaults: &TranslationDefaults,
) -> Pulp {
    let mut pulp = Pulp::new(
        &names.resource_name,
        PulpSpec {
            database: Database {
                external_db_secret: names.database_secret.clone(),
            },
            cache: Cache {
                external_cache_secret: names.cache_secret.clone(),
            },
            object_storage_s3_secret: names.object_store_secret.clone(),
            pulp_settings: pulp_settings(object_store, defaults),
        },
    );
    pulp.metadata.namespace = Some(names.namespace.clone());
    pulp
}

pub fn encode_resource(pulp: &Pulp) -> Result<Value, BootstrapError> {
    serde_json::to_value(pulp).map_err(|e| BootstrapError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_defs::{AppConfig, PULP_API_VERSION, PULP_PLURAL};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn names() -> ResourceNames {
        ResourceNames {
            namespace: "pulp".to_string(),
            resource_name: "example-pulp".to_string(),
            database_secret: "external-database".to_string(),
            cache_secret: "external-redis".to_string(),
            object_store_secret: "test-s3".to_string(),
        }
    }

    fn object_store(hostname: &str, tls: bool) -> ObjectStoreConfig {
        ObjectStoreConfig {
            hostname: hostname.to_string(),
            port: 9292,
            access_key: None,
            secret_key: None,
            tls,
            buckets: vec![],
        }
    }

    #[test]
    fn test_assemble_pulp() {
        let pulp = assemble_pulp(
            &names(),
            &object_store("endpoint", false),
            &TranslationDefaults::default(),
        );
        let body = encode_resource(&pulp).unwrap();

        let expected = json!({
            "apiVersion": "repo-manager.pulpproject.org/v1alpha1",
            "kind": "Pulp",
            "metadata": {
                "name": "example-pulp",
                "namespace": "pulp"
            },
            "spec": {
                "database": {"external_db_secret": "external-database"},
                "cache": {"external_cache_secret": "external-redis"},
                "object_storage_s3_secret": "test-s3",
                "pulp_settings": {"aws_s3_endpoint_url": "http://endpoint"}
            }
        });
        assert_eq!(body, expected);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let defaults = TranslationDefaults::default();
        let minio = object_store("minio", false);
        let first = serde_json::to_vec(&assemble_pulp(&names(), &minio, &defaults)).unwrap();
        let second = serde_json::to_vec(&assemble_pulp(&names(), &minio, &defaults)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_settings_escape_hostile_hostname() {
        let hostname = "evil\"}, \"injected\": \"x\\";
        let settings = pulp_settings(
            &object_store(hostname, false),
            &TranslationDefaults::default(),
        );

        let raw = serde_json::to_string(&settings).unwrap();
        let reparsed: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(reparsed.as_object().unwrap().len(), 1);
        assert_eq!(
            reparsed[PULP_SETTINGS_S3_ENDPOINT_KEY],
            format!("http://{}", hostname)
        );
    }

    #[test]
    fn test_settings_use_configured_scheme() {
        let defaults = TranslationDefaults {
            endpoint_scheme: "https".to_string(),
            ..Default::default()
        };
        assert_eq!(
            pulp_settings(&object_store("s3.example.com", false), &defaults),
            json!({"aws_s3_endpoint_url": "https://s3.example.com"})
        );
    }

    #[test]
    fn test_settings_follow_binding_tls() {
        let mut binding = AppConfig::sample().object_store.unwrap();
        binding.tls = true;

        let pulp = assemble_pulp(&names(), &binding, &TranslationDefaults::default());
        assert_eq!(
            pulp.spec.pulp_settings,
            json!({"aws_s3_endpoint_url": "https://endpoint"})
        );

        binding.tls = false;
        let pulp = assemble_pulp(&names(), &binding, &TranslationDefaults::default());
        assert_eq!(
            pulp.spec.pulp_settings,
            json!({"aws_s3_endpoint_url": "http://endpoint"})
        );
    }

    #[test]
    fn test_pulp_api_resource() {
        let api_resource = pulp_api_resource();
        assert_eq!(api_resource.api_version, PULP_API_VERSION);
        assert_eq!(api_resource.plural, PULP_PLURAL);
    }
}
