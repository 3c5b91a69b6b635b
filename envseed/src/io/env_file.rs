//! The target `.env` file: existence, atomic replacement, read-back.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::core::entries::EnvFile;

/// Whether the target already holds content that a write would replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Absent,
    Present,
}

/// Inspect `path` without touching it.
///
/// A path that exists but is not a regular file is an error: it can never be
/// replaced by a write.
pub fn target_state(path: &Path) -> Result<TargetState> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(TargetState::Present),
        Ok(_) => bail!("{} exists but is not a regular file", path.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(TargetState::Absent),
        Err(err) => Err(err).with_context(|| format!("inspect {}", path.display())),
    }
}

/// Replace the contents of `path` with the rendered record.
///
/// Contents go to a uniquely named temp file beside the target, which is then
/// renamed over it, so readers see either the old file or the complete new
/// one. The temp file is removed on every failure path. A symlinked target is
/// written through the link, and an existing target keeps its permissions.
/// New targets are created owner-only (`0600` on Unix).
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_env_file(path: &Path, record: &EnvFile) -> Result<()> {
    let contents = record.render();
    let path = resolve_link(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    debug!(tmp = %tmp.path().display(), bytes = contents.len(), "writing temp file");
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("write temp file {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("flush temp file {}", tmp.path().display()))?;

    match fs::metadata(&path) {
        Ok(meta) => fs::set_permissions(tmp.path(), meta.permissions())
            .with_context(|| format!("copy permissions of {}", path.display()))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err).with_context(|| format!("inspect {}", path.display())),
    }

    tmp.persist(&path)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

pub fn read_env_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Follow a symlinked target to the file it points at.
fn resolve_link(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).with_context(|| format!("resolve link {}", path.display()))
        }
        _ => Ok(path.to_path_buf()),
    }
}
