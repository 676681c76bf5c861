//! Fallback search for taxonomy files
//!
//! Architectural Principle: Service Layer - DataLocator owns the lookup order
//! - A data file is looked up in the working directory, configured directories,
//!   conventional data subdirectories, and next to the installed binary
//! - The first existing candidate wins

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Conventional subdirectories that may hold taxonomy files
pub const DATA_SUBDIRS: [&str; 3] = ["data", "resources", "assets"];

/// Resolves taxonomy file names to existing paths
#[derive(Debug, Clone, Default)]
pub struct DataLocator {
    /// Directories searched right after the bare file name
    search_dirs: Vec<PathBuf>,
    /// Directory of the running executable
    anchor: Option<PathBuf>,
}

impl DataLocator {
    /// Create a locator anchored at the running executable
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        let anchor = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self { search_dirs, anchor }
    }

    /// Replace the anchor directory (the executable's directory by default)
    pub fn with_anchor(mut self, anchor: Option<PathBuf>) -> Self {
        self.anchor = anchor;
        self
    }

    /// All paths tried for `file_name`, in lookup order
    pub fn candidates(&self, file_name: &Path) -> Vec<PathBuf> {
        if file_name.is_absolute() {
            return vec![file_name.to_path_buf()];
        }

        let mut candidates = vec![file_name.to_path_buf()];

        for dir in &self.search_dirs {
            candidates.push(dir.join(file_name));
        }

        for subdir in DATA_SUBDIRS {
            candidates.push(Path::new(subdir).join(file_name));
        }

        if let Some(anchor) = &self.anchor {
            candidates.push(anchor.join(file_name));
            if let Some(parent) = anchor.parent() {
                candidates.push(parent.join(file_name));
                for subdir in DATA_SUBDIRS {
                    candidates.push(parent.join(subdir).join(file_name));
                }
            }
        }

        let mut seen = HashSet::new();
        candidates.retain(|path| seen.insert(path.clone()));
        candidates
    }

    /// First candidate that exists as a file
    pub fn locate(&self, file_name: &Path) -> Option<PathBuf> {
        let found = self.candidates(file_name).into_iter().find(|path| path.is_file());
        if found.is_none() {
            tracing::debug!("No candidate found for {}", file_name.display());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_candidate_order() {
        let locator = DataLocator::new(vec![PathBuf::from("/srv/taxonomies")])
            .with_anchor(Some(PathBuf::from("/opt/trainer/bin")));

        let candidates = locator.candidates(Path::new("build_errors.json"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("build_errors.json"),
                PathBuf::from("/srv/taxonomies/build_errors.json"),
                PathBuf::from("data/build_errors.json"),
                PathBuf::from("resources/build_errors.json"),
                PathBuf::from("assets/build_errors.json"),
                PathBuf::from("/opt/trainer/bin/build_errors.json"),
                PathBuf::from("/opt/trainer/build_errors.json"),
                PathBuf::from("/opt/trainer/data/build_errors.json"),
                PathBuf::from("/opt/trainer/resources/build_errors.json"),
                PathBuf::from("/opt/trainer/assets/build_errors.json"),
            ]
        );
    }

    #[test]
    fn test_absolute_path_is_only_candidate() {
        let locator = DataLocator::new(vec![PathBuf::from("/srv")]);
        let candidates = locator.candidates(Path::new("/etc/build_errors.json"));
        assert_eq!(candidates, vec![PathBuf::from("/etc/build_errors.json")]);
    }

    #[test]
    fn test_duplicates_removed() {
        let locator = DataLocator::new(vec![PathBuf::from("data"), PathBuf::from("data")])
            .with_anchor(None);
        let candidates = locator.candidates(Path::new("x.json"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("x.json"),
                PathBuf::from("data/x.json"),
                PathBuf::from("resources/x.json"),
                PathBuf::from("assets/x.json"),
            ]
        );
    }

    #[test]
    fn test_locate_in_anchor_parent_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/trainer_locator_test.json"), "{}").unwrap();

        let locator = DataLocator::new(Vec::new()).with_anchor(Some(root.join("bin")));
        assert_eq!(
            locator.locate(Path::new("trainer_locator_test.json")),
            Some(root.join("assets/trainer_locator_test.json"))
        );
    }

    #[test]
    fn test_search_dir_wins_over_anchor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("custom")).unwrap();
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("custom/trainer_pick.json"), "{}").unwrap();
        fs::write(root.join("data/trainer_pick.json"), "{}").unwrap();

        let locator =
            DataLocator::new(vec![root.join("custom")]).with_anchor(Some(root.join("bin")));
        assert_eq!(
            locator.locate(Path::new("trainer_pick.json")),
            Some(root.join("custom/trainer_pick.json"))
        );
    }

    #[test]
    fn test_locate_missing() {
        let temp_dir = TempDir::new().unwrap();
        let locator = DataLocator::new(Vec::new()).with_anchor(Some(temp_dir.path().join("bin")));
        assert!(locator.locate(Path::new("trainer_does_not_exist.json")).is_none());
    }
}
