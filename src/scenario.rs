use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::client::ClusterCli;
use crate::cmd;
use crate::error::{CheckError, CheckResult};
use crate::object;
use crate::pod::pod_for_image;
use crate::wait::{WaitOpts, wait_for_build, wait_for_pod_running};

/// Per-run configuration for one scenario execution: which
/// cluster CLI to drive, which namespace to work in, where to
/// write generated descriptors, and how long each wait may take.
/// Nothing here is ambient; every value is owned by the run.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub namespace: String,
    pub binary: String,
    pub kubeconfig: Option<String>,
    pub output_dir: PathBuf,
    pub build_wait: WaitOpts,
    pub pod_wait: WaitOpts,
}

impl ScenarioConfig {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            binary: "oc".to_string(),
            kubeconfig: None,
            output_dir: std::env::temp_dir(),
            build_wait: WaitOpts::default(),
            pod_wait: WaitOpts::default(),
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
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn build_wait(mut self, opts: WaitOpts) -> Self {
        self.build_wait = opts;
        self
    }

    #[must_use]
    pub const fn pod_wait(mut self, opts: WaitOpts) -> Self {
        self.pod_wait = opts;
        self
    }

    fn cluster_cli(&self) -> ClusterCli {
        let mut cli = ClusterCli::new(&self.namespace).binary(&self.binary);
        if let Some(kubeconfig) = &self.kubeconfig {
            cli = cli.kubeconfig(kubeconfig);
        }
        cli
    }
}

/// One named step and whether it passed.
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub name: String,
    pub passed: bool,
}

/// Flat, ordered record of the steps a scenario ran. The first
/// failed step is always the last entry: the runner is
/// fail-fast and never retries a prior step.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    pub steps: Vec<StepRecord>,
}

impl ScenarioReport {
    #[must_use]
    pub fn new(scenario: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            steps: Vec::new(),
        }
    }

    /// True when every recorded step passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.passed)
    }
}

/// Run one named step, record its outcome, and propagate the
/// first error.
fn step<T>(
    report: &mut ScenarioReport,
    name: &str,
    f: impl FnOnce() -> CheckResult<T>,
) -> CheckResult<T> {
    eprintln!("--> {name}");
    let result = f();
    report.steps.push(StepRecord {
        name: name.to_string(),
        passed: result.is_ok(),
    });
    result
}

/// Fail with the literal captured output when the marker is
/// missing.
pub fn assert_contains(pod: &str, output: &str, marker: &str) -> CheckResult<()> {
    if output.contains(marker) {
        Ok(())
    } else {
        Err(CheckError::Assertion {
            pod: pod.to_string(),
            marker: marker.to_string(),
            output: output.to_string(),
        })
    }
}

/// The STI environment-file scenario: build an image from
/// fixtures whose source carries a `.sti/environment` file, run
/// the image in a pod, and verify the injected variable shows up
/// in the pod's HTTP response.
///
/// Defaults mirror the canonical fixtures: build config `test`,
/// image stream `test:latest`, probe `curl http://0.0.0.0:8080`,
/// marker `success`.
#[derive(Debug, Clone)]
pub struct StiEnvCheck {
    pub config: ScenarioConfig,
    pub image_stream_fixture: PathBuf,
    pub build_fixture: PathBuf,
    pub build_config: String,
    pub stream: String,
    pub tag: String,
    pub pod_name: String,
    pub port: u16,
    pub probe_command: String,
    pub probe_args: Vec<String>,
    pub marker: String,
}

impl StiEnvCheck {
    #[must_use]
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            image_stream_fixture: PathBuf::from("fixtures/test-image-stream.json"),
            build_fixture: PathBuf::from("fixtures/test-env-build.json"),
            build_config: "test".to_string(),
            stream: "test".to_string(),
            tag: "latest".to_string(),
            pod_name: "sample-pod".to_string(),
            port: 8080,
            probe_command: "curl".to_string(),
            probe_args: vec!["http://0.0.0.0:8080".to_string()],
            marker: "success".to_string(),
        }
    }

    #[must_use]
    pub fn image_stream_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_stream_fixture = path.into();
        self
    }

    #[must_use]
    pub fn build_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_fixture = path.into();
        self
    }

    #[must_use]
    pub fn build_config(mut self, name: &str) -> Self {
        self.build_config = name.to_string();
        self
    }

    #[must_use]
    pub fn stream_tag(mut self, stream: &str, tag: &str) -> Self {
        self.stream = stream.to_string();
        self.tag = tag.to_string();
        self
    }

    #[must_use]
    pub fn pod_name(mut self, name: &str) -> Self {
        self.pod_name = name.to_string();
        self
    }

    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn probe(mut self, command: &str, args: &[&str]) -> Self {
        self.probe_command = command.to_string();
        self.probe_args = args.iter().map(|a| (*a).to_string()).collect();
        self
    }

    #[must_use]
    pub fn marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();
        self
    }

    /// Path the generated pod descriptor is written to.
    #[must_use]
    pub fn descriptor_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}-{}.json", self.config.namespace, self.pod_name))
    }

    /// Check that the cluster CLI is on PATH before touching the
    /// cluster.
    fn check_prerequisites(&self) -> CheckResult<()> {
        if cmd::command_exists(&self.config.binary) {
            Ok(())
        } else {
            Err(CheckError::CommandNotFound(self.config.binary.clone()))
        }
    }

    /// Execute the scenario end to end. Strictly forward: the
    /// first error aborts the run and surfaces as the result.
    pub fn run(&self) -> CheckResult<ScenarioReport> {
        self.check_prerequisites()?;

        let cli = self.config.cluster_cli();
        let mut report = ScenarioReport::new("sti-env-build");

        step(
            &mut report,
            &format!("create image stream from {}", self.image_stream_fixture.display()),
            || cli.create_from_file(&self.image_stream_fixture),
        )?;

        step(
            &mut report,
            &format!("create build config from {}", self.build_fixture.display()),
            || cli.create_from_file(&self.build_fixture),
        )?;

        let build_name = step(
            &mut report,
            &format!("start a build from config '{}'", self.build_config),
            || cli.start_build(&self.build_config),
        )?;

        step(
            &mut report,
            &format!("wait for build '{build_name}' to complete"),
            || wait_for_build(&cli, &build_name, self.config.build_wait).map(drop),
        )?;

        let image = step(
            &mut report,
            &format!("resolve image reference for {}:{}", self.stream, self.tag),
            || cli.image_reference(&self.stream, &self.tag),
        )?;

        let descriptor_path = self.descriptor_path();
        step(
            &mut report,
            &format!("write pod descriptor to {}", descriptor_path.display()),
            || {
                let pod = pod_for_image(&self.pod_name, &image, self.port);
                object::write_to_file(&pod, &descriptor_path)
            },
        )?;

        step(
            &mut report,
            &format!("create pod from {}", descriptor_path.display()),
            || cli.create_from_file(&descriptor_path),
        )?;

        step(
            &mut report,
            &format!("wait for pod '{}' to be running", self.pod_name),
            || wait_for_pod_running(&cli, &self.pod_name, self.config.pod_wait),
        )?;

        let output = step(
            &mut report,
            &format!("probe pod '{}' over http", self.pod_name),
            || {
                let args: Vec<&str> = self.probe_args.iter().map(String::as_str).collect();
                cli.exec(&self.pod_name, &self.probe_command, &args)
            },
        )?;

        step(
            &mut report,
            &format!("check probe output for {:?}", self.marker),
            || assert_contains(&self.pod_name, &output, &self.marker),
        )?;

        Ok(report)
    }
}

/// Command-line entry point wrapping a configured scenario.
///
/// Consumers construct a [`StiEnvCheck`] in their own binary and
/// hand it to the harness, which parses arguments and dispatches.
pub struct Harness {
    check: StiEnvCheck,
}

impl Harness {
    #[must_use]
    pub const fn new(check: StiEnvCheck) -> Self {
        Self { check }
    }

    /// Parse CLI arguments and dispatch the appropriate
    /// command.
    ///
    /// # Errors
    ///
    /// Returns an error if the dispatched command fails.
    pub fn run(&self) -> CheckResult<()> {
        let cli = Cli::parse();

        match &cli.command {
            Command::Run {
                namespace,
                binary,
                kubeconfig,
                output_dir,
                build_timeout,
                pod_timeout,
                image_stream_fixture,
                build_fixture,
            } => self.cmd_run(&RunOverrides {
                namespace: namespace.as_deref(),
                binary: binary.as_deref(),
                kubeconfig: kubeconfig.as_deref(),
                output_dir: output_dir.as_deref(),
                build_timeout: *build_timeout,
                pod_timeout: *pod_timeout,
                image_stream_fixture: image_stream_fixture.as_deref(),
                build_fixture: build_fixture.as_deref(),
            }),
            Command::Render { image, port } => self.cmd_render(image, *port),
        }
    }

    fn cmd_run(&self, overrides: &RunOverrides<'_>) -> CheckResult<()> {
        let check = overrides.apply(self.check.clone());

        let report = check.run()?;

        eprintln!();
        eprintln!(
            "Scenario '{}' passed ({} steps)",
            report.scenario,
            report.steps.len()
        );
        Ok(())
    }

    fn cmd_render(&self, image: &str, port: Option<u16>) -> CheckResult<()> {
        let pod = pod_for_image(
            &self.check.pod_name,
            image,
            port.unwrap_or(self.check.port),
        );
        println!("{}", serde_json::to_string_pretty(&pod)?);
        Ok(())
    }
}

struct RunOverrides<'a> {
    namespace: Option<&'a str>,
    binary: Option<&'a str>,
    kubeconfig: Option<&'a str>,
    output_dir: Option<&'a Path>,
    build_timeout: Option<u32>,
    pod_timeout: Option<u32>,
    image_stream_fixture: Option<&'a Path>,
    build_fixture: Option<&'a Path>,
}

impl RunOverrides<'_> {
    fn apply(&self, mut check: StiEnvCheck) -> StiEnvCheck {
        if let Some(namespace) = self.namespace {
            check.config.namespace = namespace.to_string();
        }
        if let Some(binary) = self.binary {
            check.config.binary = binary.to_string();
        }
        if let Some(kubeconfig) = self.kubeconfig {
            check.config.kubeconfig = Some(kubeconfig.to_string());
        }
        if let Some(dir) = self.output_dir {
            check.config.output_dir = dir.to_path_buf();
        }
        if let Some(secs) = self.build_timeout {
            check.config.build_wait = timeout_opts(secs);
        }
        if let Some(secs) = self.pod_timeout {
            check.config.pod_wait = timeout_opts(secs);
        }
        if let Some(path) = self.image_stream_fixture {
            check.image_stream_fixture = path.to_path_buf();
        }
        if let Some(path) = self.build_fixture {
            check.build_fixture = path.to_path_buf();
        }
        check
    }
}

/// Convert a whole-run timeout in seconds to polling attempts at
/// the default two-second interval, keeping at least one attempt.
fn timeout_opts(secs: u32) -> WaitOpts {
    WaitOpts::new(secs.div_ceil(2).max(1), Duration::from_secs(2))
}

#[derive(Parser)]
#[command(name = "buildcheck")]
#[command(about = "Verify a source-to-image build end to end")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute the scenario against a live cluster
    Run {
        /// Namespace to create resources in
        #[arg(long)]
        namespace: Option<String>,

        /// Cluster CLI binary to drive
        #[arg(long)]
        binary: Option<String>,

        /// Kubeconfig handed to the CLI
        #[arg(long)]
        kubeconfig: Option<String>,

        /// Directory for generated descriptor files
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Build wait deadline in seconds
        #[arg(long)]
        build_timeout: Option<u32>,

        /// Pod wait deadline in seconds
        #[arg(long)]
        pod_timeout: Option<u32>,

        /// Image-stream fixture path
        #[arg(long)]
        image_stream_fixture: Option<PathBuf>,

        /// Build-config fixture path
        #[arg(long)]
        build_fixture: Option<PathBuf>,
    },

    /// Print the pod descriptor for an image without touching
    /// the cluster
    Render {
        /// Registry-qualified image reference
        image: String,

        /// Container port to expose
        #[arg(long)]
        port: Option<u16>,
    },
}
