mod cache;
mod database;
mod object_store;
mod provision;
mod resource;
mod secret;

pub use cache::cache_secret;
pub use database::database_secret;
pub use object_store::{first_bucket, object_store_secret};
pub use provision::{provision, ProvisionReport, ProvisionStep, StepOutcome};
pub use resource::{assemble_pulp, encode_resource, pulp_api_resource, pulp_settings, ResourceNames};
pub use secret::build_secret;
