//! Migration script emission for external schema tooling.
//!
//! Scripts are written using:
//! 1. Write to a temp file with a PID suffix
//! 2. Sync to ensure data reaches disk
//! 3. Atomic rename to the target path

use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

use crate::error::{FulltextError, Result};

use super::index::FulltextIndex;

/// Writes versioned FULLTEXT migration scripts into a target directory.
///
/// Script names follow `V<utc-stamp>__fulltext_<table>.sql` so external
/// migration tooling picks them up in order. Files are renamed into place
/// whole, never observed half-written.
pub struct MigrationWriter {
    dir: PathBuf,
}

impl MigrationWriter {
    /// Create a writer targeting the given migrations directory.
    ///
    /// The directory is created on first write if it doesn't exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The target migrations directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Emit the migration script for one index.
    ///
    /// The script contains the CREATE statement and the DROP statement as a
    /// commented rollback section. Returns the script path.
    pub fn write_script(&self, index: &FulltextIndex) -> Result<PathBuf> {
        let stamp = Utc::now().format("%Y%m%d%H%M%S");
        let file_name = format!("V{}__fulltext_{}.sql", stamp, index.table);
        let path = self.dir.join(file_name);

        let mut script = String::new();
        script.push_str(&format!(
            "-- Add FULLTEXT index {} on {}\n",
            index.name, index.table
        ));
        script.push_str(&format!("{};\n", index.create_sql()));
        script.push_str("\n-- Rollback:\n");
        script.push_str(&format!("-- {};\n", index.drop_sql()));

        self.write_atomic(&path, script.as_bytes())?;
        info!("Wrote FULLTEXT migration script: {}", path.display());
        Ok(path)
    }

    /// Emit a JSON descriptor for tooling that consumes structured index
    /// definitions instead of raw SQL.
    pub fn write_descriptor(&self, index: &FulltextIndex) -> Result<PathBuf> {
        let path = self.dir.join(format!("fulltext_{}.json", index.table));

        let serialized =
            serde_json::to_string_pretty(index).map_err(|e| FulltextError::Json {
                message: format!("Failed to serialize index descriptor: {}", e),
                source: Some(e),
            })?;

        self.write_atomic(&path, serialized.as_bytes())?;
        debug!("Wrote index descriptor: {}", path.display());
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| FulltextError::Io {
                message: format!("Failed to create directory {}", self.dir.display()),
                path: Some(self.dir.clone()),
                source: Some(e),
            })?;
        }

        let temp_path = path.with_extension(format!("tmp.{}", process::id()));
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| FulltextError::io_with_path(e, &temp_path))?;

            file.write_all(contents)
                .map_err(|e| FulltextError::io_with_path(e, &temp_path))?;
            file.sync_all()
                .map_err(|e| FulltextError::io_with_path(e, &temp_path))?;
        }

        fs::rename(&temp_path, path).map_err(|e| FulltextError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelDescriptor;
    use tempfile::TempDir;

    fn sample_index() -> FulltextIndex {
        let desc = ModelDescriptor::new("Article", "articles", &["title", "body"]);
        FulltextIndex::for_descriptor(&desc).unwrap()
    }

    #[test]
    fn test_write_script() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MigrationWriter::new(temp_dir.path());

        let path = writer.write_script(&sample_index()).unwrap();
        assert!(path.exists());

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with('V'));
        assert!(name.ends_with("__fulltext_articles.sql"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains(
            "CREATE FULLTEXT INDEX idx_articles_fulltext ON articles (title, body);"
        ));
        assert!(contents.contains("-- DROP INDEX idx_articles_fulltext ON articles;"));
    }

    #[test]
    fn test_write_script_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("db").join("migrations");
        let writer = MigrationWriter::new(&nested);

        let path = writer.write_script(&sample_index()).unwrap();
        assert!(path.exists());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_write_descriptor_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MigrationWriter::new(temp_dir.path());
        let index = sample_index();

        let path = writer.write_descriptor(&index).unwrap();
        assert!(path.ends_with("fulltext_articles.json"));

        let contents = fs::read_to_string(&path).unwrap();
        let back: FulltextIndex = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MigrationWriter::new(temp_dir.path());

        writer.write_script(&sample_index()).unwrap();
        writer.write_descriptor(&sample_index()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext != "sql" && ext != "json"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
