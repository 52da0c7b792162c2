//! Upload persistence
//!
//! Writes accepted uploads into the vault directory, one uniquely named
//! file per handle, skipping unsupported extensions.

pub mod naming;

use log::{error, info, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PersistenceError, SaveError};
use crate::upload::{DEFAULT_NAME, RawUpload};
use naming::{extension_of, is_supported, random_filename};

/// Persists a batch of uploads into `target_dir`, returning the saved
/// paths in input order.
///
/// The directory is created (with parents) if absent. Handles with an
/// unsupported extension are skipped with a warning, not errored. Any
/// directory-creation, read, or write failure, and any handle with no
/// readable capability, aborts the whole batch; files written before the
/// failure stay on disk.
pub fn persist_uploads<I>(uploads: I, target_dir: &Path) -> Result<Vec<PathBuf>, PersistenceError>
where
    I: IntoIterator<Item = RawUpload>,
{
    save_all(uploads, target_dir).map_err(|e| {
        error!(
            "Failed to save uploaded files to {}: {}",
            target_dir.display(),
            e
        );
        PersistenceError::new("Failed to save uploaded files", target_dir, e)
    })
}

fn save_all<I>(uploads: I, target_dir: &Path) -> Result<Vec<PathBuf>, SaveError>
where
    I: IntoIterator<Item = RawUpload>,
{
    fs::create_dir_all(target_dir)?;

    let mut saved = Vec::new();
    for upload in uploads {
        let name = upload.name().unwrap_or(DEFAULT_NAME).to_string();
        let ext = extension_of(&name);
        if !is_supported(&ext) {
            warn!("Unsupported file skipped: {}", name);
            continue;
        }

        let out = target_dir.join(random_filename(&ext));
        let data = upload.resolve()?.into_source().read_all()?;
        {
            let mut file = File::create(&out)?;
            file.write_all(&data)?;
        }

        info!("File saved for ingestion: {} -> {}", name, out.display());
        saved.push(out);
    }
    Ok(saved)
}
