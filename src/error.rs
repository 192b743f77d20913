use std::process::ExitStatus;

pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("failed to create resource from {path}: {reason}")]
    ResourceCreation { path: String, reason: String },

    #[error("failed to start build from config '{config}': {reason}")]
    BuildTrigger { config: String, reason: String },

    #[error(
        "build '{0}' did not reach a terminal phase after {1} attempts"
    )]
    BuildTimeout(String, u32),

    #[error("build '{name}' ended in phase {phase}")]
    BuildFailed { name: String, phase: String },

    #[error("image stream '{stream}' has no tag '{tag}'")]
    ImageResolution { stream: String, tag: String },

    #[error("failed to write descriptor to {path}: {reason}")]
    Serialization { path: String, reason: String },

    #[error("pod '{0}' did not reach Running after {1} attempts")]
    PodTimeout(String, u32),

    #[error("pod '{name}' ended in phase {phase}")]
    PodFailed { name: String, phase: String },

    #[error("exec in pod '{pod}' failed: {reason}")]
    Exec { pod: String, reason: String },

    #[error(
        "pod '{pod}' output does not contain {marker:?}: {output:?}"
    )]
    Assertion {
        pod: String,
        marker: String,
        output: String,
    },

    #[error("command failed: {command}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
