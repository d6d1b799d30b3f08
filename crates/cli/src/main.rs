use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use scanpath::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "scanpath-cli")]
#[command(about = "Scan-path search over fields of convex obstacles")]
struct Cmd {
    /// Solver tuning JSON (`SolverCfg`); missing fields use defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate a field and run one optimizer on it
    Solve {
        /// Field JSON: `{ "x_max", "y_max", "obstacles": [{ "vertices": [[x, y], ...] }] }`
        #[arg(long)]
        task: PathBuf,
        /// `genetic` (two-leg solution) or `annealing` (single leg)
        #[arg(long)]
        algo: Algorithm,
        /// Parameter JSON: `{ "genetic": {...}, "annealing": {...} }`
        #[arg(long)]
        params: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a random field of pairwise disjoint convex obstacles
    Generate {
        #[arg(long)]
        x_max: f64,
        #[arg(long)]
        y_max: f64,
        #[arg(long)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check a field and print its obstacles in convex vertex order
    Validate {
        #[arg(long)]
        task: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = match &cmd.config {
        Some(path) => read_json::<SolverCfg>(path)?,
        None => SolverCfg::default(),
    };
    match cmd.action {
        Action::Solve {
            task,
            algo,
            params,
            seed,
            out,
        } => solve_cmd(&task, algo, params.as_deref(), seed, out.as_deref(), &cfg),
        Action::Generate {
            x_max,
            y_max,
            count,
            seed,
            out,
        } => generate_cmd(x_max, y_max, count, seed, out.as_deref(), &cfg),
        Action::Validate { task } => validate_cmd(&task),
        Action::Report => report(),
    }
}

fn solve_cmd(
    task: &Path,
    algo: Algorithm,
    params: Option<&Path>,
    seed: Option<u64>,
    out: Option<&Path>,
    cfg: &SolverCfg,
) -> Result<()> {
    let field: Field = read_json(task)?;
    let params: Params = match params {
        Some(path) => read_json(path)?,
        None => Params::default(),
    };
    let seed = resolve_seed(seed);
    tracing::info!(task = %task.display(), %algo, seed, "solve");
    let mut rng = StdRng::seed_from_u64(seed);
    let outcome = solve(algo, &field, &params, cfg, &mut rng)?;
    let provenance = json!({
        "task": task.to_string_lossy(),
        "algo": algo,
        "params": params,
        "cfg": cfg,
    });
    emit(&outcome, out, Payload::new(provenance).with_seed(seed))
}

fn generate_cmd(
    x_max: f64,
    y_max: f64,
    count: usize,
    seed: Option<u64>,
    out: Option<&Path>,
    cfg: &SolverCfg,
) -> Result<()> {
    let seed = resolve_seed(seed);
    tracing::info!(x_max, y_max, count, seed, "generate");
    let mut rng = StdRng::seed_from_u64(seed);
    let obstacles = generate_field(x_max, y_max, count, cfg, &mut rng)?;
    let field = Field::new(x_max, y_max, obstacles);
    let provenance = json!({
        "x_max": x_max,
        "y_max": y_max,
        "count": count,
        "cfg": cfg,
    });
    emit(&field, out, Payload::new(provenance).with_seed(seed))
}

fn validate_cmd(task: &Path) -> Result<()> {
    let field: Field = read_json(task)?;
    let ordered = validate_field(&field)?;
    tracing::info!(obstacles = ordered.len(), "field is valid");
    println!("{}", serde_json::to_string_pretty(&ordered)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "version": scanpath::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Write `value` to `out` with a provenance sidecar, or print it when no path is given.
#[track_caller]
fn emit<T: Serialize>(value: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}
