use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const PULP_API_VERSION: &str = "repo-manager.pulpproject.org/v1alpha1";
pub const PULP_PLURAL: &str = "pulps";

pub const PULP_SETTINGS_S3_ENDPOINT_KEY: &str = "aws_s3_endpoint_url";

// Only the subset of the operator's PulpSpec this tool sets. Field names are
// snake_case on the wire, as the operator defines them.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    group = "repo-manager.pulpproject.org",
    version = "v1alpha1",
    kind = "Pulp",
    plural = "pulps",
    namespaced,
    derive = "PartialEq"
)]
pub struct PulpSpec {
    pub database: Database,
    pub cache: Cache,
    pub object_storage_s3_secret: String,
    /// Raw settings merged into Pulp's settings.py by the operator.
    pub pulp_settings: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Database {
    pub external_db_secret: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Cache {
    pub external_cache_secret: String,
}
