mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fanfield::plan::write_csv;
use fanfield::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use input::load_portals;

#[derive(Parser)]
#[command(name = "fanfield")]
#[command(about = "Plan fan fields over a set of portals")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan from a portal list and write the plan JSON (plus optional CSV)
    Plan {
        /// Portal list, `.json` (array of records) or `.csv` (id,name,lat,lng)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        clusters: usize,
        /// Replay a layout; drawn at random when omitted
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = fanfield::geo::DEFAULT_ZOOM)]
        zoom: u8,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Re-render the CSV of a saved plan
    Export {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the stats block of a saved plan
    Stats {
        #[arg(long)]
        from: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Plan {
            input,
            out,
            clusters,
            seed,
            zoom,
            csv,
        } => run_plan(&input, &out, clusters, seed, zoom, csv.as_deref()),
        Action::Export { from, out } => export(&from, &out),
        Action::Stats { from } => stats(&from),
    }
}

fn run_plan(
    input: &Path,
    out: &Path,
    clusters: usize,
    seed: Option<u64>,
    zoom: u8,
    csv: Option<&Path>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(input = %input.display(), out = %out.display(), clusters, seed, zoom, "plan");

    let portals = load_portals(input)?;
    let cfg = PlanCfg {
        cluster_count: clusters,
        zoom,
        ..PlanCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let result = plan_mercator(&portals, &cfg, &mut rng)
        .with_context(|| format!("planning {}", input.display()))?;

    create_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut payload = provenance::Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "portals": portals.len(),
        "cfg": cfg,
        "seed": seed,
    }));
    if let Some(csv) = csv {
        write_csv_file(&result.sections, csv)?;
        payload = payload.with_output(csv);
    }
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(
        links = result.stats.links,
        fields = result.stats.fields,
        ap = result.stats.ap,
        walk_km = %result.stats.walk_km(),
        provenance = %prov.display(),
        "plan written"
    );
    Ok(())
}

fn export(from: &Path, out: &Path) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), "export");
    let result = read_plan(from)?;
    write_csv_file(&result.sections, out)
}

fn stats(from: &Path) -> Result<()> {
    tracing::info!(from = %from.display(), "stats");
    let result = read_plan(from)?;
    println!("{}", serde_json::to_string_pretty(&result.stats)?);
    Ok(())
}

fn read_plan(path: &Path) -> Result<PlanResult> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing plan {}", path.display()))
}

fn write_csv_file(sections: &[PlanSection], path: &Path) -> Result<()> {
    create_parent(path)?;
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(sections, BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
