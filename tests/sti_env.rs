//! End-to-end scenario: build an image from fixtures whose
//! source carries a `.sti/environment` file, run it in a pod,
//! and verify the injected variable appears in the HTTP
//! response.
//!
//! Requires a reachable cluster and the `oc` binary on PATH.
//! Skipped in normal `cargo test` runs unless the `integration`
//! feature is enabled.

#![cfg(feature = "integration")]

use buildcheck::{ScenarioConfig, StiEnvCheck};

#[test]
fn sti_build_honors_environment_file() {
    let config = ScenarioConfig::new("build-sti-env")
        .output_dir(std::env::temp_dir());

    let report = StiEnvCheck::new(config)
        .image_stream_fixture("fixtures/test-image-stream.json")
        .build_fixture("fixtures/test-env-build.json")
        .run()
        .expect("scenario failed");

    assert!(report.passed());
    assert_eq!(report.steps.len(), 10);
}
