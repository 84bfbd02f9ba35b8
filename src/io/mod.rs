pub mod known_optima;
pub mod solver_output;

#[cfg(test)]
pub(crate) mod tests {
    use std::path::{Path, PathBuf};

    pub(crate) fn test_instances_directory(name: impl AsRef<Path>) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testcases")
            .join(name)
    }

    pub(crate) fn test_instances(name: &str) -> Vec<PathBuf> {
        let pattern = test_instances_directory(name).join("*");
        let result: Vec<_> = glob::glob(pattern.to_str().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert!(!result.is_empty());

        result
    }
}
