use std::path::Path;

use crate::error::{Error, Result};

/// Reads a project file, mapping a missing file to [`Error::MissingTarget`].
pub fn read_target<P: AsRef<Path>>(root: P, relative: &str) -> Result<String> {
    let path = root.as_ref().join(relative);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::MissingTarget { path: relative.to_string() })
        }
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Writes a project file, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Removes a file, or a directory with everything below it.
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        std::fs::remove_dir_all(path).map_err(Error::IoError)
    } else {
        std::fs::remove_file(path).map_err(Error::IoError)
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_target_is_reported_by_relative_path() {
        let dir = TempDir::new().unwrap();
        let err = read_target(dir.path(), "src-tauri/Cargo.toml").unwrap_err();
        assert!(matches!(err, Error::MissingTarget { ref path } if path == "src-tauri/Cargo.toml"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".github/workflows/publish.yml");
        write_file("name: x\n", &target).unwrap();
        assert_eq!(read_target(dir.path(), ".github/workflows/publish.yml").unwrap(), "name: x\n");
    }

    #[test]
    fn removes_directories_recursively() {
        let dir = TempDir::new().unwrap();
        write_file("fn main() {}", dir.path().join("scripts/setup/src/main.rs")).unwrap();
        remove_path(dir.path().join("scripts/setup")).unwrap();
        assert!(!dir.path().join("scripts/setup").exists());
        assert!(dir.path().join("scripts").exists());
    }

    #[test]
    fn reads_everything_from_reader() {
        let input = std::io::Cursor::new("{\"projectName\": \"x\"}");
        assert_eq!(read_from(input).unwrap(), "{\"projectName\": \"x\"}");
    }
}
