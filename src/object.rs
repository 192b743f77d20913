use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CheckError, CheckResult};

/// Serialize a descriptor to a file. The extension picks the
/// wire format: `.yaml`/`.yml` writes YAML, anything else JSON.
pub fn write_to_file<T: Serialize>(value: &T, path: &Path) -> CheckResult<()> {
    let result = if is_yaml(path) {
        serde_yaml::to_string(value)
            .map_err(|e| e.to_string())
            .and_then(|s| std::fs::write(path, s).map_err(|e| e.to_string()))
    } else {
        serde_json::to_vec_pretty(value)
            .map_err(|e| e.to_string())
            .and_then(|bytes| std::fs::write(path, bytes).map_err(|e| e.to_string()))
    };

    result.map_err(|reason| CheckError::Serialization {
        path: path.display().to_string(),
        reason,
    })
}

/// Read a descriptor back from a file, format by extension.
pub fn read_from_file<T: DeserializeOwned>(path: &Path) -> CheckResult<T> {
    let reader = BufReader::new(File::open(path)?);
    if is_yaml(path) {
        Ok(serde_yaml::from_reader(reader)?)
    } else {
        Ok(serde_json::from_reader(reader)?)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::is_yaml;

    #[test]
    fn extension_detection() {
        assert!(is_yaml(Path::new("pod.yaml")));
        assert!(is_yaml(Path::new("pod.YML")));
        assert!(!is_yaml(Path::new("pod.json")));
        assert!(!is_yaml(Path::new("pod")));
    }
}
