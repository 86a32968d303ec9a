use std::path::PathBuf;

use bootstrap_common::ResourceNames;
use bootstrap_defs::{
    TranslationDefaults, DEFAULT_DATABASE_NAME, DEFAULT_REGION, TLS_ENDPOINT_SCHEME,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pulp-bootstrap",
    about = "Translate Clowder bindings into Pulp operator secrets and create a sample Pulp resource"
)]
pub struct Args {
    /// Namespace the secrets and the Pulp resource are created in
    #[arg(long, env = "PULP_NAMESPACE", default_value = "pulp")]
    pub namespace: String,

    /// Name of the Pulp resource
    #[arg(long, env = "PULP_CR_NAME", default_value = "example-pulp")]
    pub cr_name: String,

    #[arg(long, env = "PULP_DATABASE_SECRET", default_value = "external-database")]
    pub database_secret: String,

    #[arg(long, env = "PULP_CACHE_SECRET", default_value = "external-redis")]
    pub cache_secret: String,

    #[arg(long, env = "PULP_S3_SECRET", default_value = "test-s3")]
    pub s3_secret: String,

    /// Path to the Clowder cdappconfig.json; sample bindings are used when unset
    #[arg(long, env = "ACG_CONFIG")]
    pub clowder_config: Option<PathBuf>,

    /// Database name Pulp connects to
    #[arg(long, env = "PULP_DATABASE_NAME", default_value = DEFAULT_DATABASE_NAME)]
    pub database_name: String,

    /// Region used when the bucket does not specify one
    #[arg(long, env = "PULP_DEFAULT_REGION", default_value = DEFAULT_REGION)]
    pub default_region: String,

    /// Use https for the S3 endpoint even when the Clowder binding does not declare TLS
    #[arg(long, env = "PULP_S3_TLS")]
    pub s3_tls: bool,

    /// Print the manifests instead of submitting them
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn resource_names(&self) -> ResourceNames {
        ResourceNames {
            namespace: self.namespace.clone(),
            resource_name: self.cr_name.clone(),
            database_secret: self.database_secret.clone(),
            cache_secret: self.cache_secret.clone(),
            object_store_secret: self.s3_secret.clone(),
        }
    }

    pub fn translation_defaults(&self) -> TranslationDefaults {
        let mut defaults = TranslationDefaults {
            database_name: self.database_name.clone(),
            region: self.default_region.clone(),
            ..Default::default()
        };
        if self.s3_tls {
            defaults.endpoint_scheme = TLS_ENDPOINT_SCHEME.to_string();
        }
        defaults
    }
}
