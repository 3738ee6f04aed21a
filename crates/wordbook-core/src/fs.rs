//! Filesystem utilities for atomic document writes.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, WordbookError};

/// Write `data` to `path` so that readers only ever see the old or the new
/// complete content.
///
/// The bytes go to a uniquely named temp file next to the target, are synced
/// to disk, and the temp file is then renamed over the target. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns `WordbookError::Storage` if any step fails. The target is left
/// untouched in that case.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path)?;
    if let Some(parent) = temp_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WordbookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| WordbookError::Storage(format!("Temp file create failed: {}", e)))?;
    let written = file
        .write_all(data)
        .and_then(|_| file.sync_all())
        .map_err(|e| WordbookError::Storage(format!("Temp file write failed: {}", e)));
    if let Err(err) = written {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);

    rename_with_fallback(&temp_path, path)
        .map_err(|e| WordbookError::Storage(format!("Atomic rename failed: {}", e)))?;
    remove_stale_temp_files(path);
    Ok(())
}

/// Build the sibling temp path used by [`write_atomic`].
///
/// The name is `<file>.<nanos>.tmp` so concurrent or stale temp files never
/// collide with each other or with the document itself.
pub fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let parent = path
        .parent()
        .ok_or_else(|| WordbookError::Storage("Invalid document path".to_string()))?;
    let filename = path
        .file_name()
        .ok_or_else(|| WordbookError::Storage("Invalid document filename".to_string()))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| WordbookError::Storage(format!("System time error: {}", e)))?
        .as_nanos();
    let mut temp_name = filename.to_os_string();
    temp_name.push(format!(".{}.tmp", nanos));
    Ok(parent.join(temp_name))
}

/// Delete `<file>.<nanos>.tmp` siblings left behind by saves that died
/// before their rename. Returns how many were removed.
///
/// Best effort: an unreadable directory or a file that cannot be removed is
/// skipped.
pub fn remove_stale_temp_files(path: &Path) -> usize {
    let (Some(parent), Some(filename)) = (path.parent(), path.file_name()) else {
        return 0;
    };
    let dir = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        if !is_temp_file_for(&entry.file_name(), filename) {
            continue;
        }
        let stale = entry.path();
        match fs::remove_file(&stale) {
            Ok(()) => {
                tracing::debug!(path = %stale.display(), "removed stale temp file");
                removed += 1;
            }
            Err(err) => {
                tracing::debug!(path = %stale.display(), error = %err, "could not remove stale temp file")
            }
        }
    }
    removed
}

/// Whether `candidate` has the `<filename>.<digits>.tmp` shape.
fn is_temp_file_for(candidate: &OsStr, filename: &OsStr) -> bool {
    candidate
        .as_encoded_bytes()
        .strip_prefix(filename.as_encoded_bytes())
        .and_then(|rest| rest.strip_prefix(b"."))
        .and_then(|rest| rest.strip_suffix(b".tmp"))
        .is_some_and(|nanos| !nanos.is_empty() && nanos.iter().all(u8::is_ascii_digit))
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
