use std::fmt;

use serde::Deserialize;

/// Phase reported in a build's status block. The cluster owns
/// the transitions; this side only observes snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BuildPhase {
    New,
    Pending,
    Running,
    Complete,
    Failed,
    Error,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BuildPhase {
    /// True for phases the cluster never leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed | Self::Error | Self::Cancelled)
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::New => "New",
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
            Self::Error => "Error",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildStatus {
    pub phase: BuildPhase,
}

/// A build resource as returned by `get build <name> -o json`,
/// reduced to the fields the scenario inspects.
#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    pub metadata: ObjectMeta,
    pub status: BuildStatus,
}

/// Terminal-condition classification of one build snapshot.
///
/// A single snapshot maps to exactly one outcome, so "passed"
/// and "failed" cannot both hold for the same observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Not ours, or not terminal yet. Keep polling.
    Pending,
    /// The named build completed.
    Succeeded,
    /// The named build reached Failed or Error.
    Failed,
}

/// Classify a build snapshot against the build we are waiting
/// for. Snapshots for other builds are `Pending`.
#[must_use]
pub fn classify(build: &Build, name: &str) -> BuildOutcome {
    if build.metadata.name != name {
        return BuildOutcome::Pending;
    }
    match build.status.phase {
        BuildPhase::Complete => BuildOutcome::Succeeded,
        BuildPhase::Failed | BuildPhase::Error => BuildOutcome::Failed,
        _ => BuildOutcome::Pending,
    }
}

/// Extract the build name from `start-build` stdout.
///
/// Older clients print the bare name (`test-1`); newer ones
/// print `build.build.openshift.io/test-1 started`. Both forms
/// reduce to the first token of the first line, minus any
/// `kind/` prefix.
#[must_use]
pub fn parse_build_name(stdout: &str) -> Option<String> {
    let token = stdout.lines().next()?.split_whitespace().next()?;
    let name = token.rsplit('/').next().unwrap_or(token);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
