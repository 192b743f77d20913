use buildcheck::pod::{Pod, pod_for_image};

#[test]
fn serializes_with_wire_field_names() {
    let pod = pod_for_image("sample-pod", "registry:5000/ns/test@sha256:abc", 8080);
    let json = serde_json::to_string_pretty(&pod).unwrap();

    assert!(json.contains("\"apiVersion\": \"v1\""));
    assert!(json.contains("\"kind\": \"Pod\""));
    assert!(json.contains("\"containerPort\": 8080"));
    assert!(json.contains("registry:5000/ns/test@sha256:abc"));
    // An unset status block must not leak into the descriptor.
    assert!(!json.contains("\"status\""));
}

#[test]
fn descriptor_round_trips_image_reference() {
    let image = "registry:5000/ns/test@sha256:abc";
    let pod = pod_for_image("sample-pod", image, 8080);

    let json = serde_json::to_string(&pod).unwrap();
    let parsed: Pod = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.metadata.name, "sample-pod");
    assert_eq!(parsed.spec.containers[0].image, image);
}

#[test]
fn parses_cluster_shaped_document() {
    let parsed: Pod = serde_json::from_str(
        r#"{
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": { "name": "sample-pod" },
            "spec": {
                "containers": [
                    {
                        "name": "sample-pod",
                        "image": "registry:5000/ns/test@sha256:abc",
                        "ports": [ { "containerPort": 8080 } ]
                    }
                ]
            },
            "status": { "phase": "Pending" }
        }"#,
    )
    .unwrap();

    assert_eq!(parsed.spec.containers[0].ports[0].container_port, 8080);
    assert!(parsed.status.is_some());
}
