use bootstrap_defs::{
    BootstrapError, ObjectStoreBucket, ObjectStoreConfig, SecretPayload, TranslationDefaults,
    S3_ACCESS_KEY_ID, S3_BUCKET_NAME, S3_REGION, S3_SECRET_ACCESS_KEY,
};

/// Pulp is given a single bucket; the first one Clowder lists is it.
pub fn first_bucket(config: &ObjectStoreConfig) -> Result<&ObjectStoreBucket, BootstrapError> {
    config.buckets.first().ok_or_else(|| {
        BootstrapError::Precondition(format!(
            "object store {} has no buckets",
            config.hostname
        ))
    })
}

/// Maps a Clowder object store binding onto the operator's S3 secret.
///
/// Credentials come from the top-level keys only. A region set on the bucket
/// takes precedence over the default region.
pub fn object_store_secret(
    config: &ObjectStoreConfig,
    defaults: &TranslationDefaults,
) -> Result<SecretPayload, BootstrapError> {
    let bucket = first_bucket(config)?;

    let access_key = config.access_key.clone().unwrap_or_default();
    let secret_key = config.secret_key.clone().unwrap_or_default();
    let region = bucket
        .region
        .clone()
        .unwrap_or_else(|| defaults.region.clone());

    Ok([
        (S3_ACCESS_KEY_ID, access_key),
        (S3_SECRET_ACCESS_KEY, secret_key),
        (S3_BUCKET_NAME, bucket.name.clone()),
        (S3_REGION, region),
    ]
    .into_iter()
    .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_defs::OBJECT_STORE_SECRET_KEYS;
    use pretty_assertions::assert_eq;

    fn bucket(name: &str, region: Option<&str>) -> ObjectStoreBucket {
        ObjectStoreBucket {
            access_key: Some("test".to_string()),
            secret_key: Some("test".to_string()),
            requested_name: "reqname".to_string(),
            name: name.to_string(),
            region: region.map(|r| r.to_string()),
            endpoint: None,
        }
    }

    fn object_store(buckets: Vec<ObjectStoreBucket>) -> ObjectStoreConfig {
        ObjectStoreConfig {
            hostname: "endpoint".to_string(),
            port: 9292,
            access_key: Some("test".to_string()),
            secret_key: Some("test".to_string()),
            tls: false,
            buckets,
        }
    }

    #[test]
    fn test_object_store_secret() {
        let config = object_store(vec![bucket("pulp", None)]);
        let payload = object_store_secret(&config, &TranslationDefaults::default()).unwrap();

        let expected: SecretPayload = [
            ("s3-access-key-id", "test"),
            ("s3-secret-access-key", "test"),
            ("s3-bucket-name", "pulp"),
            ("s3-region", "us-east-1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_object_store_secret_no_buckets() {
        let config = object_store(vec![]);
        let result = object_store_secret(&config, &TranslationDefaults::default());

        match result {
            Err(BootstrapError::Precondition(message)) => {
                assert_eq!(message, "object store endpoint has no buckets")
            }
            other => panic!("expected precondition error, got {:?}", other),
        }
    }

    #[test]
    fn test_bucket_region_overrides_region_only() {
        let config = object_store(vec![bucket("pulp", Some("eu-west-1"))]);
        let payload = object_store_secret(&config, &TranslationDefaults::default()).unwrap();

        assert_eq!(payload.get(S3_REGION), Some("eu-west-1"));
        assert_eq!(payload.get(S3_SECRET_ACCESS_KEY), Some("test"));
    }

    #[test]
    fn test_only_first_bucket_is_used() {
        let config = object_store(vec![
            bucket("first", None),
            bucket("second", Some("ap-south-1")),
        ]);
        let payload = object_store_secret(&config, &TranslationDefaults::default()).unwrap();

        assert_eq!(payload.get(S3_BUCKET_NAME), Some("first"));
        assert_eq!(payload.get(S3_REGION), Some("us-east-1"));
    }

    #[test]
    fn test_missing_top_level_keys_default_to_empty() {
        let mut config = object_store(vec![bucket("pulp", None)]);
        config.access_key = None;
        config.secret_key = None;

        let payload = object_store_secret(&config, &TranslationDefaults::default()).unwrap();

        // Bucket-level credentials are not used as a fallback
        assert_eq!(payload.get(S3_ACCESS_KEY_ID), Some(""));
        assert_eq!(payload.get(S3_SECRET_ACCESS_KEY), Some(""));
        assert_eq!(payload.len(), OBJECT_STORE_SECRET_KEYS.len());
        for key in OBJECT_STORE_SECRET_KEYS {
            assert!(payload.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_default_region_is_overridable() {
        let config = object_store(vec![bucket("pulp", None)]);
        let defaults = TranslationDefaults {
            region: "eu-central-1".to_string(),
            ..Default::default()
        };
        let payload = object_store_secret(&config, &defaults).unwrap();
        assert_eq!(payload.get(S3_REGION), Some("eu-central-1"));
    }
}
