use bootstrap_defs::{
    InMemoryDbConfig, SecretPayload, TranslationDefaults, REDIS_DB, REDIS_HOST, REDIS_PASSWORD,
    REDIS_PORT,
};

pub fn cache_secret(config: &InMemoryDbConfig, defaults: &TranslationDefaults) -> SecretPayload {
    [
        (REDIS_HOST, config.hostname.clone()),
        (REDIS_PORT, config.port.to_string()),
        (REDIS_PASSWORD, config.password.clone().unwrap_or_default()),
        (REDIS_DB, defaults.cache_db_index.clone()),
    ]
    .into_iter()
    .collect()
}
