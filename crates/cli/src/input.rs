//! Portal ingest for the CLI: a JSON array of records or a CSV table.

use anyhow::{bail, Context, Result};
use fanfield::prelude::PortalInput;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read portals from `path`, dispatching on the file extension.
pub fn load_portals(path: &Path) -> Result<Vec<PortalInput>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!(
            "unsupported input {}: expected .json or .csv",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<PortalInput>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Columns `id,name,lat,lng`; extra columns are ignored. Missing text cells
/// become empty strings and missing coordinates become NaN so that the
/// planner's validation reports them by id.
fn load_csv(path: &Path) -> Result<Vec<PortalInput>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("id").cast(DataType::String),
            col("name").cast(DataType::String),
            col("lat").cast(DataType::Float64),
            col("lng").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns id,name,lat,lng from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let ids = df.column("id")?.str()?;
    let names = df.column("name")?.str()?;
    let lats = df.column("lat")?.f64()?;
    let lngs = df.column("lng")?.f64()?;
    let portals = ids
        .into_iter()
        .zip(names)
        .zip(lats)
        .zip(lngs)
        .map(|(((id, name), lat), lng)| {
            PortalInput::new(
                id.unwrap_or_default(),
                name.unwrap_or_default(),
                lat.unwrap_or(f64::NAN),
                lng.unwrap_or(f64::NAN),
            )
        })
        .collect();
    Ok(portals)
}
