//! Android project root discovery.
//!
//! The generator is meant to be run from inside a project checkout, either at
//! the project root or one level below it (e.g. from a `tool/` directory).
//! `AndroidManifest.xml` is only used as a marker file for locating the root.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Marker file that identifies an Android project root.
pub const MANIFEST_FILE: &str = "AndroidManifest.xml";

/// A discovered (or explicitly supplied) Android project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    dir: PathBuf,
}

impl ProjectRoot {
    /// Locate the project root starting from `start`.
    ///
    /// Checks for the manifest in `start` first, then in its parent. The
    /// start directory wins when both carry a manifest.
    pub fn discover(start: &Path) -> Result<Self> {
        if start.join(MANIFEST_FILE).is_file() {
            tracing::debug!("Found {} in {}", MANIFEST_FILE, start.display());
            return Ok(Self {
                dir: start.to_path_buf(),
            });
        }

        if let Some(parent) = start.parent() {
            if parent.join(MANIFEST_FILE).is_file() {
                tracing::debug!("Found {} in parent {}", MANIFEST_FILE, parent.display());
                return Ok(Self {
                    dir: parent.to_path_buf(),
                });
            }
        }

        bail!(
            "Project root not found: no {} in {} or its parent",
            MANIFEST_FILE,
            start.display()
        );
    }

    /// Use `dir` as the project root without searching. The manifest must
    /// still be present so a typo'd path fails early.
    pub fn at(dir: &Path) -> Result<Self> {
        if !dir.join(MANIFEST_FILE).is_file() {
            bail!(
                "{} is not an Android project root ({} missing)",
                dir.display(),
                MANIFEST_FILE
            );
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Discover from the current working directory.
    pub fn discover_from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        Self::discover(&cwd)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to `res/drawable` under this root.
    pub fn drawable_dir(&self) -> PathBuf {
        self.dir.join("res").join("drawable")
    }

    /// Verify the drawable directory exists before anything gets written.
    /// The generator never creates resource directories itself.
    pub fn checked_drawable_dir(&self) -> Result<PathBuf> {
        let dir = self.drawable_dir();
        if !dir.is_dir() {
            bail!(
                "Drawable directory {} does not exist (is this an Android project?)",
                dir.display()
            );
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch_manifest(dir: &Path) {
        fs::write(dir.join(MANIFEST_FILE), "<manifest/>").unwrap();
    }

    #[test]
    fn test_discover_in_start_dir() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path());

        let root = ProjectRoot::discover(tmp.path()).unwrap();
        assert_eq!(root.dir(), tmp.path());
    }

    #[test]
    fn test_discover_in_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path());
        let tool_dir = tmp.path().join("tool");
        fs::create_dir(&tool_dir).unwrap();

        let root = ProjectRoot::discover(&tool_dir).unwrap();
        assert_eq!(root.dir(), tmp.path());
    }

    #[test]
    fn test_start_dir_wins_over_parent() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path());
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch_manifest(&sub);

        let root = ProjectRoot::discover(&sub).unwrap();
        assert_eq!(root.dir(), sub);
    }

    #[test]
    fn test_discover_fails_without_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let err = ProjectRoot::discover(&sub).unwrap_err();
        assert!(err.to_string().contains("Project root not found"));
    }

    #[test]
    fn test_explicit_root_requires_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(ProjectRoot::at(tmp.path()).is_err());

        touch_manifest(tmp.path());
        let root = ProjectRoot::at(tmp.path()).unwrap();
        assert_eq!(root.dir(), tmp.path());
    }

    #[test]
    fn test_checked_drawable_dir() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path());
        let root = ProjectRoot::at(tmp.path()).unwrap();

        assert!(root.checked_drawable_dir().is_err());

        fs::create_dir_all(tmp.path().join("res").join("drawable")).unwrap();
        let dir = root.checked_drawable_dir().unwrap();
        assert_eq!(dir, tmp.path().join("res").join("drawable"));
    }
}
