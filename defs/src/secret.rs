use serde::Serialize;
use std::collections::BTreeMap;

// Key names are the contract with the Pulp operator. The casing differs per
// dependency kind and must stay that way.

pub const POSTGRES_HOST: &str = "POSTGRES_HOST";
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";
pub const POSTGRES_USERNAME: &str = "POSTGRES_USERNAME";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const POSTGRES_DB_NAME: &str = "POSTGRES_DB_NAME";
pub const POSTGRES_SSLMODE: &str = "POSTGRES_SSLMODE";

pub const REDIS_HOST: &str = "REDIS_HOST";
pub const REDIS_PORT: &str = "REDIS_PORT";
pub const REDIS_PASSWORD: &str = "REDIS_PASSWORD";
pub const REDIS_DB: &str = "REDIS_DB";

pub const S3_ACCESS_KEY_ID: &str = "s3-access-key-id";
pub const S3_SECRET_ACCESS_KEY: &str = "s3-secret-access-key";
pub const S3_BUCKET_NAME: &str = "s3-bucket-name";
pub const S3_REGION: &str = "s3-region";

pub const DATABASE_SECRET_KEYS: [&str; 6] = [
    POSTGRES_HOST,
    POSTGRES_PORT,
    POSTGRES_USERNAME,
    POSTGRES_PASSWORD,
    POSTGRES_DB_NAME,
    POSTGRES_SSLMODE,
];
pub const CACHE_SECRET_KEYS: [&str; 4] = [REDIS_HOST, REDIS_PORT, REDIS_PASSWORD, REDIS_DB];
pub const OBJECT_STORE_SECRET_KEYS: [&str; 4] = [
    S3_ACCESS_KEY_ID,
    S3_SECRET_ACCESS_KEY,
    S3_BUCKET_NAME,
    S3_REGION,
];

/// Flat credential bundle in the layout the operator reads from a Secret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SecretPayload(BTreeMap<String, String>);

impl SecretPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SecretPayload(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
