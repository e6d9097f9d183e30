//! Scratch volume roots for tests.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use super::drives::Volumes;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// A throwaway volume root under the system temp dir, removed on drop.
pub struct TempRoot(pub PathBuf);

impl TempRoot {
    pub fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "dosterm-{tag}-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    pub fn volumes(&self) -> Volumes {
        Volumes::new(self.0.clone())
    }

    /// Create the host directory backing a logical drive.
    pub fn mkdrive(&self, name: &str) -> PathBuf {
        let dir = self.0.join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Create a directory under the root, `/`-separated.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let dir = self.0.join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a file under the root, `/`-separated, creating parents.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let file = self.0.join(rel);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, contents).unwrap();
        file
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.0.join(rel)).unwrap()
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}
