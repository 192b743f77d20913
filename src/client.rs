use std::path::Path;

use serde::de::DeserializeOwned;

use crate::build::{Build, parse_build_name};
use crate::cmd;
use crate::error::{CheckError, CheckResult};
use crate::image::ImageStream;
use crate::pod::Pod;

/// Wrapper around the external cluster CLI, scoped to one
/// namespace. Exit codes and captured output are the only
/// interface; resource lookups go through `get ... -o json`.
pub struct ClusterCli {
    binary: String,
    namespace: String,
    kubeconfig: Option<String>,
}

impl ClusterCli {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            binary: "oc".to_string(),
            namespace: namespace.to_string(),
            kubeconfig: None,
        }
    }

    #[must_use]
    pub fn binary(mut self, binary: &str) -> Self {
        self.binary = binary.to_string();
        self
    }

    #[must_use]
    pub fn kubeconfig(mut self, path: &str) -> Self {
        self.kubeconfig = Some(path.to_string());
        self
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Submit a declarative resource definition from a fixture
    /// or generated file.
    pub fn create_from_file(&self, path: &Path) -> CheckResult<()> {
        let path_str = path.display().to_string();
        self.run(&["create", "-f", &path_str])
            .map(drop)
            .map_err(|e| CheckError::ResourceCreation {
                path: path_str,
                reason: e.to_string(),
            })
    }

    /// Trigger a build from a build configuration and return the
    /// generated build identifier.
    pub fn start_build(&self, config: &str) -> CheckResult<String> {
        let stdout = self
            .run(&["start-build", config])
            .map_err(|e| CheckError::BuildTrigger {
                config: config.to_string(),
                reason: e.to_string(),
            })?;

        parse_build_name(&stdout).ok_or_else(|| CheckError::BuildTrigger {
            config: config.to_string(),
            reason: format!("no build name in output {stdout:?}"),
        })
    }

    /// Look up a build resource by name.
    pub fn build(&self, name: &str) -> CheckResult<Build> {
        self.get("build", name)
    }

    /// Look up an image-stream resource by name.
    pub fn image_stream(&self, name: &str) -> CheckResult<ImageStream> {
        self.get("imagestream", name)
    }

    /// Look up a pod resource by name.
    pub fn pod(&self, name: &str) -> CheckResult<Pod> {
        self.get("pod", name)
    }

    /// Resolve the registry-qualified image reference a stream
    /// has recorded for `tag`.
    pub fn image_reference(&self, stream: &str, tag: &str) -> CheckResult<String> {
        let is = self.image_stream(stream)?;
        is.docker_image_reference(tag)
            .map(ToString::to_string)
            .ok_or_else(|| CheckError::ImageResolution {
                stream: stream.to_string(),
                tag: tag.to_string(),
            })
    }

    /// Execute a command inside a running pod and capture its
    /// combined output.
    pub fn exec(&self, pod: &str, command: &str, args: &[&str]) -> CheckResult<String> {
        let mut cli_args = vec!["exec", "-p", pod];
        cli_args.extend(self.scope_args());
        cli_args.push("--");
        cli_args.push(command);
        cli_args.extend_from_slice(args);

        cmd::run_combined(&self.binary, &cli_args).map_err(|e| CheckError::Exec {
            pod: pod.to_string(),
            reason: e.to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, kind: &str, name: &str) -> CheckResult<T> {
        let stdout = self.run(&["get", kind, name, "-o", "json"])?;
        Ok(serde_json::from_str(&stdout)?)
    }

    fn run(&self, args: &[&str]) -> CheckResult<String> {
        let mut full: Vec<&str> = args.to_vec();
        full.extend(self.scope_args());
        cmd::run(&self.binary, &full)
    }

    fn scope_args(&self) -> Vec<&str> {
        let mut args = vec!["-n", self.namespace.as_str()];
        if let Some(kubeconfig) = &self.kubeconfig {
            args.push("--config");
            args.push(kubeconfig);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = ClusterCli::new("build-sti-env");
        assert_eq!(cli.namespace(), "build-sti-env");
        assert_eq!(cli.binary, "oc");
        assert!(cli.kubeconfig.is_none());
    }

    #[test]
    fn builder_chain() {
        let cli = ClusterCli::new("ns")
            .binary("/usr/local/bin/oc")
            .kubeconfig("/tmp/kubeconfig");

        assert_eq!(cli.binary, "/usr/local/bin/oc");
        assert_eq!(cli.kubeconfig.as_deref(), Some("/tmp/kubeconfig"));
    }

    #[test]
    fn scope_includes_namespace_and_config() {
        let cli = ClusterCli::new("ns").kubeconfig("/tmp/kubeconfig");
        assert_eq!(
            cli.scope_args(),
            vec!["-n", "ns", "--config", "/tmp/kubeconfig"],
        );
    }
}
