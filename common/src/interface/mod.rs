mod dry_run;
mod kube_client;
mod submission;

pub use dry_run::DryRunSubmissionClient;
pub use kube_client::KubeSubmissionClient;
pub use submission::SubmissionClient;

#[cfg(test)]
pub use submission::MockSubmissionClient;
