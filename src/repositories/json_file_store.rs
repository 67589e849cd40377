use crate::error::{StorageError, StorageResult};
use crate::repositories::traits::{RecordMap, RecordStore};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record store backed by a single pretty-printed JSON file.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a failed save leaves the previous store intact. There is no locking:
/// two processes saving to the same path race and the last rename wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_records(&self, file: File, tmp_path: &Path, records: &RecordMap) -> StorageResult<()> {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush().map_err(|e| self.io_error(tmp_path, e))
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StorageResult<RecordMap> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()))
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let records: RecordMap = serde_json::from_reader(BufReader::new(file))?;
        if let Some((key, record)) = records
            .iter()
            .find(|(key, record)| key.as_str() != record.name().as_str())
        {
            return Err(StorageError::KeyMismatch {
                key: key.clone(),
                name: record.name().to_string(),
            });
        }

        debug!(path = %self.path.display(), count = records.len(), "Loaded record store");
        Ok(records)
    }

    fn save(&mut self, records: &RecordMap) -> StorageResult<()> {
        let tmp_path = self.tmp_path();
        let file = File::create(&tmp_path).map_err(|e| self.io_error(&tmp_path, e))?;

        let written = self
            .write_records(file, &tmp_path, records)
            .and_then(|()| {
                std::fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(&self.path, e))
            });
        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e);
        }

        debug!(path = %self.path.display(), count = records.len(), "Saved record store");
        Ok(())
    }
}
