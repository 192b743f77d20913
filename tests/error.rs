use buildcheck::error::CheckError;

#[test]
fn display_resource_creation() {
    let err = CheckError::ResourceCreation {
        path: "fixtures/test-image-stream.json".into(),
        reason: "command failed: oc create".into(),
    };
    assert_eq!(
        err.to_string(),
        "failed to create resource from fixtures/test-image-stream.json: \
         command failed: oc create"
    );
}

#[test]
fn display_build_trigger() {
    let err = CheckError::BuildTrigger {
        config: "test".into(),
        reason: "no build name in output \"\"".into(),
    };
    assert_eq!(
        err.to_string(),
        "failed to start build from config 'test': no build name in output \"\""
    );
}

#[test]
fn display_build_timeout() {
    let err = CheckError::BuildTimeout("test-1".into(), 60);
    assert_eq!(
        err.to_string(),
        "build 'test-1' did not reach a terminal phase after 60 attempts"
    );
}

#[test]
fn display_build_failed() {
    let err = CheckError::BuildFailed {
        name: "test-1".into(),
        phase: "Error".into(),
    };
    assert_eq!(err.to_string(), "build 'test-1' ended in phase Error");
}

#[test]
fn display_image_resolution() {
    let err = CheckError::ImageResolution {
        stream: "test".into(),
        tag: "latest".into(),
    };
    assert_eq!(err.to_string(), "image stream 'test' has no tag 'latest'");
}

#[test]
fn display_serialization() {
    let err = CheckError::Serialization {
        path: "/tmp/pod.json".into(),
        reason: "permission denied".into(),
    };
    assert_eq!(
        err.to_string(),
        "failed to write descriptor to /tmp/pod.json: permission denied"
    );
}

#[test]
fn display_pod_timeout() {
    let err = CheckError::PodTimeout("sample-pod".into(), 60);
    assert_eq!(
        err.to_string(),
        "pod 'sample-pod' did not reach Running after 60 attempts"
    );
}

#[test]
fn display_pod_failed() {
    let err = CheckError::PodFailed {
        name: "sample-pod".into(),
        phase: "Failed".into(),
    };
    assert_eq!(err.to_string(), "pod 'sample-pod' ended in phase Failed");
}

#[test]
fn display_exec() {
    let err = CheckError::Exec {
        pod: "sample-pod".into(),
        reason: "command not found: oc".into(),
    };
    assert_eq!(
        err.to_string(),
        "exec in pod 'sample-pod' failed: command not found: oc"
    );
}

#[test]
fn display_assertion_carries_output() {
    let err = CheckError::Assertion {
        pod: "sample-pod".into(),
        marker: "success".into(),
        output: "<html>hello</html>".into(),
    };
    assert_eq!(
        err.to_string(),
        "pod 'sample-pod' output does not contain \"success\": \"<html>hello</html>\""
    );
}

#[test]
fn display_command_not_found() {
    let err = CheckError::CommandNotFound("oc".into());
    assert_eq!(err.to_string(), "command not found: oc");
}

#[test]
fn from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err: CheckError = io_err.into();
    assert!(matches!(err, CheckError::Io(_)));
}

#[test]
fn from_json_error() {
    let json_err = serde_json::from_str::<Vec<u64>>("invalid").unwrap_err();
    let err: CheckError = json_err.into();
    assert!(matches!(err, CheckError::Json(_)));
}
