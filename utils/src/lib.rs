mod clowder;
mod logging;

pub use clowder::{load_app_config, resolve_app_config};
pub use logging::setup_logging;
