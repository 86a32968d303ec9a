pub mod interface;
pub mod logic;

pub use interface::{DryRunSubmissionClient, KubeSubmissionClient, SubmissionClient};
pub use logic::{
    assemble_pulp, build_secret, cache_secret, database_secret, encode_resource, first_bucket,
    object_store_secret, provision, pulp_api_resource, pulp_settings, ProvisionReport,
    ProvisionStep, ResourceNames, StepOutcome,
};
