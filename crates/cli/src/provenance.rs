//! `<stem>.provenance.json` sidecars recording how a plan file was produced.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run parameters plus any extra files written next to the artifact.
pub struct Payload {
    pub params: Value,
    pub outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(path.into());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar {
    code_rev: String,
    planner: &'static str,
    callsite: Callsite,
    params: Value,
    /// Artifact first, then the payload outputs in order.
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let artifact = artifact.as_ref();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        planner: fanfield::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: payload.params,
        outputs: std::iter::once(artifact.to_path_buf())
            .chain(payload.outputs)
            .map(|p| p.display().to_string())
            .collect(),
    };

    let path = sidecar_path(artifact);
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating sidecar dir {}", dir.display()))?,
        _ => {}
    }
    let body = serde_json::to_vec_pretty(&sidecar)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !out.status.success() {
                return None;
            }
            String::from_utf8(out.stdout)
                .ok()
                .map(|s| s.trim().to_string())
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_string())
}
