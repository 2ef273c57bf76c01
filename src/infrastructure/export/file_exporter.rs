use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::application::ports::{ExportError, QueryExporter};

/// Writes query text to a file via a uniquely named sibling temp file and a
/// rename, so a reader never sees a half-written query and concurrent exports
/// to the same path never share a temp file
pub struct FileQueryExporter {
    path: PathBuf,
}

impl FileQueryExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temp file is created in; same filesystem as the target
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, source: std::io::Error) -> ExportError {
        ExportError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl QueryExporter for FileQueryExporter {
    fn export(&self, text: &str) -> Result<(), ExportError> {
        let mut temp = NamedTempFile::new_in(self.parent_dir())
            .map_err(|e| self.write_error(e))?;
        debug!("Writing query to temp file: {:?}", temp.path());

        let written = temp
            .write_all(text.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .and_then(|_| temp.as_file().sync_all());
        if let Err(e) = written {
            // Dropping `temp` removes the partial file
            warn!("Failed to write query to temp file {:?}: {}", temp.path(), e);
            return Err(self.write_error(e));
        }

        temp.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        debug!("Query exported to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_text_with_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query.sql");

        FileQueryExporter::new(&path)
            .export("select 1\nunion all\nselect 2")
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "select 1\nunion all\nselect 2\n");
    }

    #[test]
    fn test_export_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query.sql");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        FileQueryExporter::new(&path).export("new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        // No temp file left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("query.sql");

        let err = FileQueryExporter::new(&path).export("select 1").unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().contains("query.sql"));
    }

    #[test]
    fn test_concurrent_exports_to_same_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query.sql");
        let contents: Vec<String> = (0..8).map(|i| "x".repeat(16 * (i + 1))).collect();

        for _ in 0..20 {
            let results: Vec<Result<(), ExportError>> = std::thread::scope(|scope| {
                let handles: Vec<_> = contents
                    .iter()
                    .map(|text| {
                        let exporter = FileQueryExporter::new(&path);
                        scope.spawn(move || exporter.export(text))
                    })
                    .collect();
                handles.into_iter().map(|h| h.join().unwrap()).collect()
            });

            for result in &results {
                assert!(result.is_ok(), "export failed: {:?}", result);
            }

            // Whole contents of exactly one writer, never a mix
            let written = fs::read_to_string(&path).unwrap();
            assert!(
                contents.iter().any(|text| written == format!("{}\n", text)),
                "unexpected contents of length {}",
                written.len()
            );
            assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        }
    }
}
