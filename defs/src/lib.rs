mod clowder;
mod defaults;
mod errors;
mod pulp;
mod secret;

pub use clowder::{AppConfig, DatabaseConfig, InMemoryDbConfig, ObjectStoreBucket, ObjectStoreConfig};
pub use defaults::{
    TranslationDefaults, DEFAULT_DATABASE_NAME, DEFAULT_REGION, TLS_ENDPOINT_SCHEME,
};
pub use errors::BootstrapError;
pub use pulp::{
    Cache, Database, Pulp, PulpSpec, PULP_API_VERSION, PULP_PLURAL, PULP_SETTINGS_S3_ENDPOINT_KEY,
};
pub use secret::*;
