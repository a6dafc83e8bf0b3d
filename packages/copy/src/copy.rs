//! File and directory copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CopyError;

/// Result of a copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// Files were copied successfully.
    Created {
        /// Number of files copied.
        files_copied: u64,
    },
    /// Target already exists, operation skipped.
    Exists,
    /// Source does not exist, operation skipped.
    SourceNotFound,
}

/// Entry collected during directory enumeration.
#[derive(Debug, Clone)]
struct FileEntry {
    /// Source path.
    source: PathBuf,
    /// Target path.
    target: PathBuf,
    /// Entry kind.
    kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    Symlink,
}

/// Copy a file or a directory tree, whichever `source` is.
///
/// Only copies if the target doesn't exist.
///
/// # Errors
///
/// * If the copy operation fails
pub fn copy_path(source: &Path, target: &Path) -> Result<CopyResult, CopyError> {
    if source.is_dir() {
        copy_directory(source, target)
    } else {
        copy_file(source, target)
    }
}

/// Copy a single file.
///
/// Only copies if target doesn't exist. Missing parent directories of the
/// target are created.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
///
/// # Errors
///
/// * If the copy operation fails
pub fn copy_file(source: &Path, target: &Path) -> Result<CopyResult, CopyError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    if !source.exists() {
        log::debug!("Source does not exist");
        return Ok(CopyResult::SourceNotFound);
    }

    if target.exists() {
        log::debug!("Target already exists");
        return Ok(CopyResult::Exists);
    }

    ensure_parent(target)?;
    copy_file_with_reflink(source, target)?;

    Ok(CopyResult::Created { files_copied: 1 })
}

/// Write `content` to a new file.
///
/// Only writes if target doesn't exist. Missing parent directories of the
/// target are created.
///
/// # Errors
///
/// * If the parent directory cannot be created
/// * If the file cannot be written
pub fn write_new_file(target: &Path, content: &str) -> Result<CopyResult, CopyError> {
    log::debug!("Writing file: {}", target.display());

    if target.exists() {
        log::debug!("Target already exists");
        return Ok(CopyResult::Exists);
    }

    ensure_parent(target)?;
    fs::write(target, content).map_err(|e| CopyError::WriteError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    Ok(CopyResult::Created { files_copied: 1 })
}

/// Copy a directory tree.
///
/// Only copies if target directory doesn't exist. Entries are copied in
/// sorted order; empty subdirectories are preserved and symlinks are copied
/// as symlinks.
///
/// # Arguments
///
/// * `source` - Source directory path
/// * `target` - Target directory path
///
/// # Errors
///
/// * If enumeration fails
/// * If any file copy fails (fail-fast behavior)
pub fn copy_directory(source: &Path, target: &Path) -> Result<CopyResult, CopyError> {
    log::debug!(
        "Copying directory: {} -> {}",
        source.display(),
        target.display()
    );

    if !source.exists() {
        log::debug!("Source does not exist");
        return Ok(CopyResult::SourceNotFound);
    }

    if target.exists() {
        log::debug!("Target already exists");
        return Ok(CopyResult::Exists);
    }

    let entries = enumerate_directory(source, target)?;

    fs::create_dir_all(target).map_err(|e| CopyError::CreateDirError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    let mut files_copied = 0u64;
    for entry in &entries {
        match entry.kind {
            EntryKind::Directory => {
                fs::create_dir_all(&entry.target).map_err(|e| CopyError::CreateDirError {
                    path: entry.target.clone(),
                    io_error: e,
                })?;
            }
            EntryKind::File => {
                copy_file_with_reflink(&entry.source, &entry.target)?;
                files_copied += 1;
            }
            EntryKind::Symlink => {
                copy_symlink(&entry.source, &entry.target)?;
                files_copied += 1;
            }
        }
    }

    log::debug!("Copied {files_copied} files");

    Ok(CopyResult::Created { files_copied })
}

/// Remove a file, symlink or directory tree.
///
/// Returns `false` when nothing existed at `path`.
///
/// # Errors
///
/// * If the removal fails
pub fn remove_path(path: &Path) -> Result<bool, CopyError> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(false);
    };

    log::debug!("Removing {}", path.display());

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| CopyError::RemoveError {
        path: path.to_path_buf(),
        io_error: e,
    })?;

    Ok(true)
}

fn ensure_parent(target: &Path) -> Result<(), CopyError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CopyError::CreateDirError {
            path: parent.to_path_buf(),
            io_error: e,
        })?;
    }
    Ok(())
}

/// Enumerate a directory in sorted order, parents before children.
fn enumerate_directory(source: &Path, target: &Path) -> Result<Vec<FileEntry>, CopyError> {
    let mut entries = Vec::new();

    for entry in jwalk::WalkDir::new(source)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
    {
        let entry = entry.map_err(|e| CopyError::EnumerationError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let source_path = entry.path();

        // Skip the root directory itself
        if source_path == source {
            continue;
        }

        let rel_path =
            source_path
                .strip_prefix(source)
                .map_err(|_| CopyError::EnumerationError {
                    path: source_path.clone(),
                    message: "Failed to strip prefix".to_string(),
                })?;
        let target_path = target.join(rel_path);

        let file_type = entry.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        entries.push(FileEntry {
            source: source_path,
            target: target_path,
            kind,
        });
    }

    Ok(entries)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}

/// Copy a symlink, preserving it as a symlink.
fn copy_symlink(source: &Path, target: &Path) -> Result<(), CopyError> {
    let link_target = fs::read_link(source).map_err(|e| CopyError::ReadLinkError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&link_target, target).map_err(|e| {
            CopyError::CreateSymlinkError {
                path: target.to_path_buf(),
                io_error: e,
            }
        })?;
    }

    #[cfg(windows)]
    {
        let result = if source.is_dir() {
            std::os::windows::fs::symlink_dir(&link_target, target)
        } else {
            std::os::windows::fs::symlink_file(&link_target, target)
        };
        result.map_err(|e| CopyError::CreateSymlinkError {
            path: target.to_path_buf(),
            io_error: e,
        })?;
    }

    log::trace!(
        "Symlinked {} -> {} (target: {})",
        source.display(),
        target.display(),
        link_target.display()
    );

    Ok(())
}
