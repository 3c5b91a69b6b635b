//! Orchestration for `envseed write`.
//!
//! A write is one linear pass: inspect the target, ask before replacing an
//! existing file, replace it atomically, then echo the file back with a hint
//! on how applications load it.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::core::entries::{API_KEY, DATABASE_URL, EnvFile};
use crate::core::mask::mask;
use crate::io::env_file::{TargetState, read_env_file, target_state, write_env_file};
use crate::io::prompt::confirm_overwrite;
use crate::io::settings::Settings;

/// Values supplied on the command line (flags or `ENVSEED_*` variables).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSources {
    pub target: Option<PathBuf>,
    pub api_key: Option<String>,
    pub database_url: Option<String>,
}

/// Fully resolved input for a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub target: PathBuf,
    pub record: EnvFile,
    /// Replace an existing target without asking.
    pub force: bool,
}

/// Outcome of `envseed write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Target written; `contents` is what was read back from disk.
    Written { path: PathBuf, contents: String },
    /// Operator declined the overwrite; target untouched.
    Declined { path: PathBuf },
}

/// Merge command-line sources over settings into a write request.
///
/// Command-line values win; settings fill the gaps. A key with no value in
/// either place is an error.
pub fn resolve_request(
    sources: ValueSources,
    settings: Settings,
    force: bool,
) -> Result<WriteRequest> {
    let target = sources.target.unwrap_or(settings.target);
    let api_key = pick(API_KEY, sources.api_key, settings.api_key)?;
    let database_url = pick(DATABASE_URL, sources.database_url, settings.database_url)?;
    let record = EnvFile::service(&api_key, &database_url)?;
    Ok(WriteRequest {
        target,
        record,
        force,
    })
}

fn pick(key: &str, cli: Option<String>, settings: Option<String>) -> Result<String> {
    cli.or(settings).ok_or_else(|| {
        let field = key.to_ascii_lowercase();
        anyhow!(
            "no value for {key}: pass --{}, set ENVSEED_{key}, or add `{field}` to the settings file",
            field.replace('_', "-"),
        )
    })
}

/// Run the write flow, prompting on `input` and reporting on `output`.
pub fn run_write<R: BufRead, W: Write>(
    request: &WriteRequest,
    input: &mut R,
    output: &mut W,
) -> Result<WriteOutcome> {
    let path = request.target.as_path();
    let api_key = request
        .record
        .entries()
        .iter()
        .find(|entry| entry.key == API_KEY)
        .map(|entry| mask(&entry.value))
        .unwrap_or_default();
    debug!(path = %path.display(), api_key = %api_key, force = request.force, "starting write");

    writeln!(output, "Writing {}", path.display()).context("write status")?;

    let state = target_state(path)?;
    let replacing = state == TargetState::Present;
    if replacing && !request.force && !confirm_overwrite(input, output, path)? {
        info!(path = %path.display(), "overwrite declined");
        writeln!(output, "Aborted: {} left unchanged.", path.display())
            .context("write status")?;
        return Ok(WriteOutcome::Declined {
            path: path.to_path_buf(),
        });
    }

    write_env_file(path, &request.record)?;
    info!(
        path = %path.display(),
        entries = request.record.entries().len(),
        replaced = replacing,
        "env file written"
    );

    let contents = read_env_file(path)?;
    report_written(output, path, &request.record, &contents)?;
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        contents,
    })
}

fn report_written<W: Write>(
    output: &mut W,
    path: &Path,
    record: &EnvFile,
    contents: &str,
) -> Result<()> {
    writeln!(
        output,
        "Wrote {} entries to {}",
        record.entries().len(),
        path.display()
    )
    .context("write status")?;
    writeln!(output, "--- {} ---", path.display()).context("write status")?;
    output
        .write_all(contents.as_bytes())
        .context("echo env file")?;
    writeln!(output, "---").context("write status")?;
    write_usage_hint(output, record)
}

fn write_usage_hint<W: Write>(output: &mut W, record: &EnvFile) -> Result<()> {
    writeln!(output, "Load these values in your application with:").context("write hint")?;
    writeln!(output, "    dotenvy::dotenv()?;").context("write hint")?;
    for key in record.keys() {
        writeln!(
            output,
            "    let {} = std::env::var(\"{key}\")?;",
            key.to_ascii_lowercase()
        )
        .context("write hint")?;
    }
    Ok(())
}
