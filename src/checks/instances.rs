use std::path::{Path, PathBuf};

use tracing::debug;

use crate::checks::harness::HarnessError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    pub path: PathBuf,
}

impl Instance {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Lists every entry of `dir` in the order the file system returns them.
/// The listing is complete before this returns; entries added later are not seen.
pub fn discover_instances(dir: &Path) -> Result<Vec<Instance>, HarnessError> {
    if !dir.is_dir() {
        return Err(HarnessError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let list_error = |source| HarnessError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut instances = Vec::new();
    for entry in dir.read_dir().map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        instances.push(Instance::new(entry.path()));
    }

    debug!("Found {} instances in {dir:?}", instances.len());
    Ok(instances)
}
