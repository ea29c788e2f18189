use crate::error::{PartcheckError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Mutex;
use zip::read::ZipArchive;

/// Read-only index over a zip package.
///
/// Entry names are captured once at open time; entry contents are only
/// decompressed when [`ArchiveIndex::read`] is called. The underlying reader
/// sits behind a mutex so a single index can be shared across worker threads.
pub struct ArchiveIndex<R> {
    archive: Mutex<ZipArchive<R>>,
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl ArchiveIndex<File> {
    /// Open the package at `path`.
    ///
    /// # Errors
    /// `NotFound` / `NotAFile` when the path does not name a regular file,
    /// `InvalidContainer` when the zip central directory cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PartcheckError::NotFound {
                path: path.display().to_string(),
            });
        }
        if !path.is_file() {
            return Err(PartcheckError::NotAFile {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> ArchiveIndex<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;

        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names.dedup();
        let lookup = names.iter().cloned().collect();

        tracing::debug!(entries = names.len(), "opened package");

        Ok(Self {
            archive: Mutex::new(archive),
            names,
            lookup,
        })
    }

    /// Entry names in byte-wise sorted order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Decompress and return the bytes of entry `name`.
    ///
    /// A failure here (bad CRC, corrupt stream) means the container itself is
    /// damaged and is reported as `InvalidContainer`.
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        if !self.contains(name) {
            return Err(PartcheckError::MissingEntry {
                name: name.to_string(),
            });
        }

        // A poisoned lock only means another reader panicked mid-read; the
        // archive itself is still usable.
        let mut archive = self
            .archive
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = archive.by_name(name)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(|e| {
            PartcheckError::InvalidContainer(zip::result::ZipError::Io(e))
        })?;
        Ok(content)
    }
}
