use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters recorded in a provenance sidecar.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

/// Provenance document shared by sidecars and `shapes report`.
pub fn document(params: Value, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "version": shapes::VERSION,
        "params": params,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(
        payload.params,
        &[artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit id: `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
