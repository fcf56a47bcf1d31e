//! Filesystem side of bundle finishing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

/// Short-lived script and bundle paths under the temp directory.
///
/// Both are removed best-effort when the value is dropped, on every path out
/// of the pipeline.
#[derive(Debug)]
pub struct TempArtifacts {
    pub script: PathBuf,
    pub bundle: PathBuf,
}

impl TempArtifacts {
    pub fn allocate(temp_dir: &Path, name: &str) -> Self {
        Self {
            script: temp_dir.join(format!("OpenTerminalHere-{}.applescript", Uuid::new_v4())),
            bundle: temp_dir.join(format!("{}-{}.app", Uuid::new_v4(), name)),
        }
    }

    pub fn remove_script(&self) {
        let _ = fs::remove_file(&self.script);
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        self.remove_script();
        remove_path(&self.bundle);
    }
}

/// Remove a file or directory tree, ignoring errors
pub fn remove_path(path: &Path) {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(_) => return,
    };
    if let Err(e) = result {
        debug!("Could not remove {}: {}", path.display(), e);
    }
}

/// Recursively copy a directory; symlinks inside bundles are recreated
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dst.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_symlink() {
            copy_symlink(&path, &dest_path)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    let target = fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dst)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst).map(|_| ())
}

/// Put the compiled bundle at `dest`: drop whatever is there, copy, then
/// delete the temporary copy. Only the copy itself can fail, and a failed
/// copy leaves nothing at `dest`.
pub fn replace_bundle(compiled: &Path, dest: &Path) -> io::Result<()> {
    if fs::symlink_metadata(dest).is_ok() {
        remove_path(dest);
    }
    if let Err(e) = copy_dir_recursive(compiled, dest) {
        remove_path(dest);
        return Err(e);
    }
    remove_path(compiled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_bundle(root: &Path, marker: &str) {
        fs::create_dir_all(root.join("Contents/MacOS")).unwrap();
        fs::create_dir_all(root.join("Contents/Resources/Scripts")).unwrap();
        fs::write(root.join("Contents/MacOS/applet"), marker).unwrap();
        fs::write(root.join("Contents/Info.plist"), "<plist/>").unwrap();
    }

    #[test]
    fn test_replace_bundle_copies_and_removes_temp() {
        let dir = TempDir::new().unwrap();
        let compiled = dir.path().join("tmp.app");
        let dest = dir.path().join("out").join("Helper.app");
        make_bundle(&compiled, "new");
        fs::create_dir_all(dest.parent().unwrap()).unwrap();

        replace_bundle(&compiled, &dest).expect("copy succeeds");

        assert!(!compiled.exists());
        assert_eq!(fs::read_to_string(dest.join("Contents/MacOS/applet")).unwrap(), "new");
        assert!(dest.join("Contents/Resources/Scripts").is_dir());
    }

    #[test]
    fn test_replace_bundle_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let compiled = dir.path().join("tmp.app");
        let dest = dir.path().join("Helper.app");
        make_bundle(&dest, "old");
        fs::write(dest.join("stale.txt"), "left over").unwrap();
        make_bundle(&compiled, "new");

        replace_bundle(&compiled, &dest).expect("copy succeeds");

        assert_eq!(fs::read_to_string(dest.join("Contents/MacOS/applet")).unwrap(), "new");
        assert!(!dest.join("stale.txt").exists());
    }

    #[test]
    fn test_replace_bundle_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let err = replace_bundle(&dir.path().join("nope.app"), &dir.path().join("Helper.app"));
        assert!(err.is_err());
    }

    #[test]
    fn test_failed_copy_leaves_no_partial_bundle() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("Helper.app");
        make_bundle(&dest, "old");

        let err = replace_bundle(&dir.path().join("missing.app"), &dest);

        assert!(err.is_err());
        assert!(!dest.exists(), "failed copy left {} behind", dest.display());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_recreated() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.app");
        make_bundle(&src, "x");
        std::os::unix::fs::symlink("MacOS/applet", src.join("Contents/current")).unwrap();

        let dst = dir.path().join("dst.app");
        copy_dir_recursive(&src, &dst).unwrap();

        let link = fs::read_link(dst.join("Contents/current")).unwrap();
        assert_eq!(link, PathBuf::from("MacOS/applet"));
    }

    #[test]
    fn test_temp_artifacts_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let artifacts = TempArtifacts::allocate(dir.path(), "Helper");
        fs::write(&artifacts.script, "on run\nend run\n").unwrap();
        make_bundle(&artifacts.bundle, "x");
        let (script, bundle) = (artifacts.script.clone(), artifacts.bundle.clone());

        drop(artifacts);

        assert!(!script.exists());
        assert!(!bundle.exists());
    }

    #[test]
    fn test_temp_names_are_unique() {
        let dir = TempDir::new().unwrap();
        let a = TempArtifacts::allocate(dir.path(), "Helper");
        let b = TempArtifacts::allocate(dir.path(), "Helper");
        assert_ne!(a.script, b.script);
        assert_ne!(a.bundle, b.bundle);
        assert!(a.bundle.to_string_lossy().ends_with("-Helper.app"));
    }
}
