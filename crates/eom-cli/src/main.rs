mod dispatch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use eom_core::{LoadedEnergies, SymbolContext, engine, load_energies};
use eom_store::EquationStore;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "eom", about = "Euler-Lagrange equation-of-motion deriver")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive and persist one equation of motion per coordinate
    Derive {
        /// Energy description file
        input: PathBuf,

        /// Directory the equation artifacts are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Parse an energy description and show what it declares
    Check {
        /// Energy description file
        input: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Derive { input, out_dir } => cmd_derive(input, out_dir).await,
        Commands::Check { input } => cmd_check(input),
    }
}

/// Read the input file and load its energies, logging one warning per
/// placeholder token the file never mentions.
fn load_description(input: &Path, ctx: &SymbolContext) -> Result<LoadedEnergies> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    debug!(bytes = source.len(), input = %input.display(), "loaded energy description");

    let loaded = load_energies(&source, ctx)
        .with_context(|| format!("failed to load energies from {}", input.display()))?;
    for warning in &loaded.warnings {
        warn!(
            token = %warning.token,
            symbol = %warning.symbol,
            "placeholder not found in input"
        );
    }
    Ok(loaded)
}

async fn cmd_derive(input: &Path, out_dir: &Path) -> Result<()> {
    let ctx = Arc::new(SymbolContext::two_link_arm());
    let loaded = load_description(input, &ctx)?;
    let lagrangian = loaded.lagrangian();
    let store = EquationStore::open(out_dir)?;

    let outcomes = dispatch::dispatch(lagrangian, Arc::clone(&ctx), store).await;

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => println!("{}: ok -> {}", outcome.coordinate, path.display()),
            Err(err) => {
                failed += 1;
                println!("{}: failed - {err}", outcome.coordinate);
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} coordinate derivations failed", outcomes.len());
    }
    Ok(())
}

fn cmd_check(input: &Path) -> Result<()> {
    let ctx = SymbolContext::two_link_arm();
    let loaded = load_description(input, &ctx)?;

    println!("potential energy:             {}", engine::to_text(&loaded.potential));
    println!("translational kinetic energy: {}", engine::to_text(&loaded.translational));
    println!("rotational kinetic energy:    {}", engine::to_text(&loaded.rotational));

    if loaded.warnings.is_empty() {
        println!("all {} placeholder tokens present", ctx.placeholders.len());
    } else {
        for warning in &loaded.warnings {
            println!("warning: placeholder `{}` not found in input", warning.token);
        }
    }
    Ok(())
}
