use crate::config::{LayoutConfig, load_config};
use crate::ir::Workflow;
use crate::layout::DagLayout;
use crate::layout_dump::write_layout_dump;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wfl", version, about = "Layered layout for workflow graphs")]
pub struct Args {
    /// Workflow snapshot (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the laid-out workflow. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Layout config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Vertical gap between layers
    #[arg(long = "layer-spacing")]
    pub layer_spacing: Option<f32>,

    /// Horizontal gap between nodes of a layer
    #[arg(long = "node-spacing")]
    pub node_spacing: Option<f32>,

    /// Barycenter passes
    #[arg(long = "passes")]
    pub passes: Option<usize>,

    /// Also write a per-layer layout dump (JSON)
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = resolve_config(&args)?;
    let input = read_input(args.input.as_deref())?;
    let mut workflow: Workflow =
        serde_json::from_str(&input).context("input is not a workflow snapshot")?;

    let layout = DagLayout::new(config)
        .apply(&mut workflow)
        .context("layout refused")?;
    tracing::info!(
        nodes = layout.nodes.len(),
        layers = layout.layers.len(),
        "workflow laid out"
    );

    if let Some(path) = args.dump.as_deref() {
        write_layout_dump(path, &layout)?;
    }
    write_output(&workflow, args.output.as_deref())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_config(args: &Args) -> Result<LayoutConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(value) = args.layer_spacing {
        config.layer_spacing = value;
    }
    if let Some(value) = args.node_spacing {
        config.node_spacing = value;
    }
    if let Some(value) = args.passes {
        config.order_passes = value;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(workflow: &Workflow, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(workflow)?;
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
