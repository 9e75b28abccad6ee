use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, Preamble};
use crate::ports::PreambleStore;

/// Flat-file preamble store. The file holds exactly the preamble text.
#[derive(Debug, Clone)]
pub struct FilesystemPreambleStore {
    path: PathBuf,
}

impl FilesystemPreambleStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreambleStore for FilesystemPreambleStore {
    fn load(&self) -> Result<Preamble, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                tracing::debug!(path = %self.path.display(), "loaded stored preamble");
                Ok(Preamble::new(content))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Preamble::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, preamble: &Preamble) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, preamble.as_str())?;
        tracing::info!(path = %self.path.display(), "saved preamble");
        Ok(())
    }

    fn reset(&self) -> Result<bool, AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
