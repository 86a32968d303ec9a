use std::fmt;

use bootstrap_defs::{
    AppConfig, BootstrapError, ObjectStoreConfig, SecretPayload, TranslationDefaults,
};
use log::{debug, error, info};

use crate::interface::SubmissionClient;
use crate::logic::{
    assemble_pulp, cache_secret, database_secret, encode_resource, object_store_secret,
    pulp_api_resource, ResourceNames,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    DatabaseSecret,
    CacheSecret,
    ObjectStoreSecret,
    PulpResource,
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProvisionStep::DatabaseSecret => "database secret",
            ProvisionStep::CacheSecret => "cache secret",
            ProvisionStep::ObjectStoreSecret => "object storage secret",
            ProvisionStep::PulpResource => "Pulp resource",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug)]
pub struct StepOutcome {
    pub step: ProvisionStep,
    pub name: String,
    pub result: Result<(), BootstrapError>,
}

/// Outcome of every step that was attempted, in order. Steps do not depend on
/// each other, so one failing says nothing about the rest.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    outcomes: Vec<StepOutcome>,
}

impl ProvisionReport {
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    fn record(&mut self, step: ProvisionStep, name: &str, result: Result<(), BootstrapError>) {
        match &result {
            Ok(()) => info!("Created {} {}", step, name),
            Err(e) => {
                error!("Failed to provision {} {}: {}", step, name, e);
                if let Some(body) = e.response_body() {
                    error!("Response body: {}", body);
                }
            }
        }
        self.outcomes.push(StepOutcome {
            step,
            name: name.to_string(),
            result,
        });
    }
}

fn missing_section(section: &str) -> BootstrapError {
    BootstrapError::Precondition(format!("Clowder config has no {} section", section))
}

async fn submit_secret(
    client: &dyn SubmissionClient,
    name: &str,
    namespace: &str,
    payload: Result<SecretPayload, BootstrapError>,
) -> Result<(), BootstrapError> {
    client.create_secret(name, namespace, &payload?).await?;
    Ok(())
}

async fn submit_pulp(
    client: &dyn SubmissionClient,
    names: &ResourceNames,
    object_store: &ObjectStoreConfig,
    defaults: &TranslationDefaults,
) -> Result<(), BootstrapError> {
    let pulp = assemble_pulp(names, object_store, defaults);
    let body = encode_resource(&pulp)?;
    let response = client
        .create_resource(
            &pulp_api_resource(),
            &names.namespace,
            &names.resource_name,
            &body,
        )
        .await?;
    debug!("Pulp resource response: {}", response);
    Ok(())
}

/// Creates the three dependency secrets and the Pulp resource referencing them.
///
/// Every step is attempted once regardless of how earlier steps went; nothing
/// is rolled back.
pub async fn provision(
    client: &dyn SubmissionClient,
    config: &AppConfig,
    names: &ResourceNames,
    defaults: &TranslationDefaults,
) -> ProvisionReport {
    let mut report = ProvisionReport::default();
    let namespace = names.namespace.as_str();

    let database = config
        .database
        .as_ref()
        .map(|database| database_secret(database, defaults))
        .ok_or_else(|| missing_section("database"));
    let result = submit_secret(client, &names.database_secret, namespace, database).await;
    report.record(ProvisionStep::DatabaseSecret, &names.database_secret, result);

    let cache = config
        .in_memory_db
        .as_ref()
        .map(|cache| cache_secret(cache, defaults))
        .ok_or_else(|| missing_section("inMemoryDb"));
    let result = submit_secret(client, &names.cache_secret, namespace, cache).await;
    report.record(ProvisionStep::CacheSecret, &names.cache_secret, result);

    let object_store = config
        .object_store
        .as_ref()
        .ok_or_else(|| missing_section("objectStore"))
        .and_then(|object_store| object_store_secret(object_store, defaults));
    let result = submit_secret(client, &names.object_store_secret, namespace, object_store).await;
    report.record(
        ProvisionStep::ObjectStoreSecret,
        &names.object_store_secret,
        result,
    );

    let result = match &config.object_store {
        Some(object_store) => submit_pulp(client, names, object_store, defaults).await,
        None => Err(missing_section("objectStore")),
    };
    report.record(ProvisionStep::PulpResource, &names.resource_name, result);

    report
}
