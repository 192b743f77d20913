//! End-to-end verification of source-to-image builds.
//!
//! Buildcheck drives an external cluster CLI (`oc` or
//! compatible) through one complete build-and-run scenario: it
//! submits fixture resources, triggers a build, polls it to a
//! terminal phase, resolves the produced image reference from
//! the image stream, generates and submits a pod descriptor for
//! that image, waits for the pod, probes it over HTTP, and
//! asserts the response contains a marker string.
//!
//! The canonical use is proving that an STI build honors a
//! `.sti/environment` file: the fixtures build source carrying
//! `TEST_ENV=success`, and the probe expects `success` in the
//! served response.
//!
//! # Overview
//!
//! A verification run is defined by:
//!
//! - A [`ScenarioConfig`] owning all per-run settings: CLI
//!   binary, namespace, output directory, and the explicit
//!   polling deadlines ([`WaitOpts`])
//! - A [`StiEnvCheck`] naming the fixtures, the build config,
//!   the image stream and tag, the probe command, and the
//!   expected marker
//! - A [`Harness`] that parses command-line arguments and
//!   dispatches `run` or `render`
//!
//! Every step is fail-fast: the first error aborts the scenario
//! and surfaces as a [`CheckError`] identifying the step and the
//! resource involved. Nothing is retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use buildcheck::{Harness, ScenarioConfig, StiEnvCheck};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ScenarioConfig::new("build-sti-env")
//!         .output_dir("/tmp/buildcheck");
//!
//!     let check = StiEnvCheck::new(config)
//!         .image_stream_fixture("fixtures/test-image-stream.json")
//!         .build_fixture("fixtures/test-env-build.json");
//!
//!     Harness::new(check).run()?;
//!     Ok(())
//! }
//! ```
//!
//! Then drive your binary from the command line:
//!
//! ```sh
//! # Execute against a live cluster
//! buildcheck run --namespace build-sti-env --build-timeout 300
//!
//! # Preview the generated pod descriptor
//! buildcheck render registry:5000/ns/test@sha256:abc
//! ```
//!
//! # Pieces
//!
//! The lower layers are usable on their own: [`ClusterCli`]
//! wraps the external binary, [`classify`] is the pure terminal
//! classifier for build snapshots, and
//! [`wait_for_build`]/[`wait_for_pod_running`] are the blocking
//! polls.

// Allow noisy pedantic lints that don't add value for a test
// orchestration crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod build;
pub mod client;
pub mod cmd;
pub mod error;
pub mod image;
pub mod object;
pub mod pod;
pub mod scenario;
pub mod wait;

pub use build::{Build, BuildOutcome, BuildPhase, classify, parse_build_name};
pub use client::ClusterCli;
pub use error::{CheckError, CheckResult};
pub use image::ImageStream;
pub use pod::{Pod, PodPhase, pod_for_image};
pub use scenario::{Harness, ScenarioConfig, ScenarioReport, StepRecord, StiEnvCheck};
pub use wait::{WaitOpts, wait_for_build, wait_for_pod_running};
