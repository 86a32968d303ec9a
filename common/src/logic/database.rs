use bootstrap_defs::{
    DatabaseConfig, SecretPayload, TranslationDefaults, POSTGRES_DB_NAME, POSTGRES_HOST,
    POSTGRES_PASSWORD, POSTGRES_PORT, POSTGRES_SSLMODE, POSTGRES_USERNAME,
};

/// Maps a Clowder database binding onto the operator's external database secret.
///
/// The database name always comes from the defaults: the operator creates and
/// owns its own database, whatever Clowder provisioned.
pub fn database_secret(config: &DatabaseConfig, defaults: &TranslationDefaults) -> SecretPayload {
    [
        (POSTGRES_HOST, config.hostname.clone()),
        (POSTGRES_PORT, config.port.to_string()),
        (POSTGRES_USERNAME, config.username.clone()),
        (POSTGRES_PASSWORD, config.password.clone()),
        (POSTGRES_DB_NAME, defaults.database_name.clone()),
        (POSTGRES_SSLMODE, config.ssl_mode.clone()),
    ]
    .into_iter()
    .collect()
}
