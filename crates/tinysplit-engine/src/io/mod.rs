use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a tinysplit document from disk.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a whole document from any reader, e.g. stdin.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Read from `path` when given, otherwise from stdin.
pub fn read_source(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) => read_file(path),
        None => read_from(std::io::stdin().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.tsp");
        fs::write(&path, "(a\n)\n").unwrap();

        assert_eq!(read_file(&path).unwrap(), "(a\n)\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.tsp");

        match read_file(&path) {
            Err(IoError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn read_from_reader() {
        let content = read_from("@s\n:k\n".as_bytes()).unwrap();
        assert_eq!(content, "@s\n:k\n");
    }
}
