use serde::{Deserialize, Serialize};

// Shapes follow the cdappconfig.json document that Clowder mounts into pods.
// Unknown keys are ignored so newer Clowder versions keep parsing.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_memory_db: Option<InMemoryDbConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_store: Option<ObjectStoreConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub hostname: String,
    pub port: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub admin_username: String,
    #[serde(default)]
    pub admin_password: String,
    #[serde(default)]
    pub ssl_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rds_ca: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryDbConfig {
    pub hostname: String,
    pub port: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Absent means the cache does not require auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_mode: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreConfig {
    pub hostname: String,
    pub port: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub buckets: Vec<ObjectStoreBucket>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStoreBucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub requested_name: String,
    /// Actual bucket name, which may differ from the requested one.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl AppConfig {
    /// Sample bindings used when no Clowder document is mounted, matching what a
    /// local Clowder environment would hand out.
    pub fn sample() -> Self {
        let access_key = Some("test".to_string());
        let secret_key = Some("test".to_string());

        AppConfig {
            database: Some(DatabaseConfig {
                hostname: "dbhost".to_string(),
                port: 5432,
                name: "dbname".to_string(),
                username: "dbuser".to_string(),
                password: "dbpass".to_string(),
                admin_username: "user".to_string(),
                admin_password: "pass".to_string(),
                ssl_mode: "disable".to_string(),
                rds_ca: None,
            }),
            in_memory_db: Some(InMemoryDbConfig {
                hostname: "example.redis.local".to_string(),
                port: 6379,
                username: None,
                password: None,
                ssl_mode: None,
            }),
            object_store: Some(ObjectStoreConfig {
                hostname: "endpoint".to_string(),
                port: 9292,
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
                tls: false,
                buckets: vec![ObjectStoreBucket {
                    access_key,
                    secret_key,
                    requested_name: "reqname".to_string(),
                    name: "pulp".to_string(),
                    region: None,
                    endpoint: None,
                }],
            }),
        }
    }
}
