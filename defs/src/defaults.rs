pub const DEFAULT_DATABASE_NAME: &str = "pulp";
pub const DEFAULT_REGION: &str = "us-east-1";
// The operator reserves REDIS_DB but Clowder has no equivalent field.
pub const DEFAULT_CACHE_DB_INDEX: &str = "";
pub const DEFAULT_ENDPOINT_SCHEME: &str = "http";
pub const TLS_ENDPOINT_SCHEME: &str = "https";

/// Values the mappers fill in where the Clowder document has nothing to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDefaults {
    pub database_name: String,
    pub region: String,
    pub cache_db_index: String,
    /// Scheme for object stores whose binding does not declare TLS.
    pub endpoint_scheme: String,
}

impl Default for TranslationDefaults {
    fn default() -> Self {
        TranslationDefaults {
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            cache_db_index: DEFAULT_CACHE_DB_INDEX.to_string(),
            endpoint_scheme: DEFAULT_ENDPOINT_SCHEME.to_string(),
        }
    }
}
