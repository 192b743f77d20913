use serde::Deserialize;

/// An image-stream resource reduced to its status tag table,
/// which maps tags to the image references the cluster has
/// recorded for them.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageStream {
    pub metadata: crate::build::ObjectMeta,
    #[serde(default)]
    pub status: ImageStreamStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageStreamStatus {
    #[serde(default)]
    pub tags: Vec<TagEvents>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagEvents {
    pub tag: String,
    #[serde(default)]
    pub items: Vec<TagEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagEvent {
    pub docker_image_reference: String,
}

impl ImageStream {
    /// Registry-qualified reference for `tag`, if the stream has
    /// recorded one. Items are ordered newest first, so the
    /// first entry is the most recent push.
    #[must_use]
    pub fn docker_image_reference(&self, tag: &str) -> Option<&str> {
        self.status
            .tags
            .iter()
            .find(|t| t.tag == tag)?
            .items
            .first()
            .map(|item| item.docker_image_reference.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = r#"{
        "metadata": { "name": "test" },
        "status": {
            "tags": [
                {
                    "tag": "latest",
                    "items": [
                        { "dockerImageReference": "registry:5000/ns/test@sha256:abc" },
                        { "dockerImageReference": "registry:5000/ns/test@sha256:old" }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn resolves_newest_item_for_tag() {
        let stream: ImageStream = serde_json::from_str(STREAM).unwrap();
        assert_eq!(
            stream.docker_image_reference("latest"),
            Some("registry:5000/ns/test@sha256:abc"),
        );
    }

    #[test]
    fn absent_tag_resolves_to_none() {
        let stream: ImageStream = serde_json::from_str(STREAM).unwrap();
        assert_eq!(stream.docker_image_reference("v2"), None);
    }

    #[test]
    fn empty_status_resolves_to_none() {
        let stream: ImageStream =
            serde_json::from_str(r#"{ "metadata": { "name": "test" } }"#).unwrap();
        assert_eq!(stream.docker_image_reference("latest"), None);
    }
}
