use std::thread;
use std::time::Duration;

use crate::build::{Build, BuildOutcome, classify};
use crate::client::ClusterCli;
use crate::error::{CheckError, CheckResult};
use crate::pod::PodPhase;

/// Polling parameters for a blocking wait: a fixed interval and
/// a bounded number of attempts. The overall deadline is
/// `attempts * interval`; there is no inherited default.
#[derive(Debug, Clone, Copy)]
pub struct WaitOpts {
    pub attempts: u32,
    pub interval: Duration,
}

impl WaitOpts {
    #[must_use]
    pub const fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }
}

impl Default for WaitOpts {
    fn default() -> Self {
        Self::new(60, Duration::from_secs(2))
    }
}

/// Poll a build by name until it reaches a terminal phase.
///
/// Each snapshot is classified once: `Succeeded` returns the
/// snapshot, `Failed` aborts immediately even when the build
/// never passed through Running, and anything else sleeps and
/// retries. Exhausting the attempts is `BuildTimeout`.
pub fn wait_for_build(cli: &ClusterCli, name: &str, opts: WaitOpts) -> CheckResult<Build> {
    for attempt in 1..=opts.attempts {
        let build = cli.build(name)?;

        match classify(&build, name) {
            BuildOutcome::Succeeded => return Ok(build),
            BuildOutcome::Failed => {
                return Err(CheckError::BuildFailed {
                    name: name.to_string(),
                    phase: build.status.phase.to_string(),
                });
            }
            BuildOutcome::Pending => {
                eprintln!(
                    "  Build {name} ({attempt}/{}): {} - waiting...",
                    opts.attempts, build.status.phase
                );
            }
        }

        thread::sleep(opts.interval);
    }

    Err(CheckError::BuildTimeout(name.to_string(), opts.attempts))
}

/// Poll a pod by name until its phase is Running.
///
/// A pod that lands in Succeeded or Failed can never become
/// Running, so those abort immediately instead of burning the
/// remaining attempts.
pub fn wait_for_pod_running(cli: &ClusterCli, name: &str, opts: WaitOpts) -> CheckResult<()> {
    for attempt in 1..=opts.attempts {
        let pod = cli.pod(name)?;
        let phase = pod.status.map_or(PodPhase::Unknown, |s| s.phase);

        if phase == PodPhase::Running {
            return Ok(());
        }
        if phase.is_terminal() {
            return Err(CheckError::PodFailed {
                name: name.to_string(),
                phase: phase.to_string(),
            });
        }

        eprintln!(
            "  Pod {name} ({attempt}/{}): {phase} - waiting...",
            opts.attempts
        );
        thread::sleep(opts.interval);
    }

    Err(CheckError::PodTimeout(name.to_string(), opts.attempts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deadline() {
        let opts = WaitOpts::default();
        assert_eq!(opts.attempts, 60);
        assert_eq!(opts.interval, Duration::from_secs(2));
    }

    #[test]
    fn explicit_opts() {
        let opts = WaitOpts::new(5, Duration::from_millis(100));
        assert_eq!(opts.attempts, 5);
        assert_eq!(opts.interval, Duration::from_millis(100));
    }
}
