//! Scratch directory trees for filesystem tests.

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    pub root: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let root = env::temp_dir().join(format!("src_chmod_{}_{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    /// Creates `rel` (and its parents) with the given mode.
    pub fn file(&self, rel: &str, mode: u32) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"// contents\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    /// `a/b.cpp`, `a/b.txt`, `a/c/d.h`, all starting at 0o600.
    pub fn sample_tree(name: &str) -> Self {
        let dir = Self::new(name);
        dir.file("a/b.cpp", 0o600);
        dir.file("a/b.txt", 0o600);
        dir.file("a/c/d.h", 0o600);
        dir
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn mode_of(path: &Path) -> u32 {
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}
