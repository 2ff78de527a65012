//! Virtual environment path model.

use std::path::{Path, PathBuf};

use crate::platform;

/// Default name of the virtual environment directory.
pub const DEFAULT_VENV_DIR: &str = "venv";

/// Resolved paths for a virtual environment.
///
/// All paths are derived once from the project root and the venv directory
/// name, using the OS family's executable layout. Nothing here touches the
/// filesystem except [`VenvPaths::exists`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvPaths {
    /// Root directory of the virtual environment.
    pub root: PathBuf,

    /// Python interpreter inside the venv.
    pub python: PathBuf,

    /// pip executable inside the venv.
    pub pip: PathBuf,
}

impl VenvPaths {
    /// Compute venv paths under `project_root`.
    pub fn new(project_root: &Path, venv_dir: &str) -> Self {
        let root = project_root.join(venv_dir);
        let bin = root.join(platform::venv_bin_dir());

        Self {
            python: bin.join(platform::exe_name("python")),
            pip: bin.join(platform::exe_name("pip")),
            root,
        }
    }

    /// Whether the venv directory exists.
    ///
    /// Directory presence is the idempotence check: an existing directory
    /// means creation is skipped, matching how `python -m venv` itself
    /// treats re-runs.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_os_layout() {
        let paths = VenvPaths::new(Path::new("/proj"), "venv");

        assert_eq!(paths.root, Path::new("/proj").join("venv"));
        if cfg!(target_os = "windows") {
            assert!(paths.python.ends_with("Scripts/python.exe"));
            assert!(paths.pip.ends_with("Scripts/pip.exe"));
        } else {
            assert!(paths.python.ends_with("bin/python"));
            assert!(paths.pip.ends_with("bin/pip"));
        }
    }

    #[test]
    fn custom_venv_dir_name_is_respected() {
        let paths = VenvPaths::new(Path::new("/proj"), ".venv");
        assert_eq!(paths.root, Path::new("/proj").join(".venv"));
        assert!(paths.python.starts_with(&paths.root));
    }

    #[test]
    fn exists_reflects_directory_presence() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = VenvPaths::new(temp.path(), "venv");

        assert!(!paths.exists());
        std::fs::create_dir(&paths.root).unwrap();
        assert!(paths.exists());
    }

    #[test]
    fn a_plain_file_is_not_a_venv() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = VenvPaths::new(temp.path(), "venv");

        std::fs::write(&paths.root, "not a directory").unwrap();
        assert!(!paths.exists());
    }
}
