use crate::core::Storage;
use std::fs;
use std::path::Path;

/// Filesystem-backed storage rooted at a base directory. Outputs are fully
/// overwritten in place; missing parent directories are an error, never
/// created on the fly.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> std::io::Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read_to_string(full_path)
    }

    fn write_file(&self, path: &str, contents: &str) -> std::io::Result<()> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::write(full_path, contents)
    }
}
