//! Play find your hat in the terminal

use std::{fs, io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use find_your_hat::field_generator::FieldGenerator;
use find_your_hat::input::LineInput;
use find_your_hat::render::TerminalRenderer;
use find_your_hat::session::{GameSession, Outcome};
use find_your_hat::{Field, FieldConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Find your hat without falling into a hole
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Field width
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Field height
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Fraction of the field covered by holes, in [0, 1)
    #[arg(long, default_value_t = 0.2)]
    holes: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// File with a field to play instead of a generated one, e.g. the output
    /// of `generate-field`. Newly generated maps use its size and `--holes`.
    #[arg(long)]
    field: Option<PathBuf>,
}

/// Set up logging, build the session, play until the game ends
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let generator = FieldGenerator::new(args.seed);

    let mut session = if let Some(path) = args.field {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read field from {}", path.display()))?;
        let field = Field::parse(text.trim())?;
        field
            .validate()
            .with_context(|| format!("Cannot play field from {}", path.display()))?;
        let config = FieldConfig {
            width: field.width(),
            height: field.height(),
            holes_percentage: args.holes,
        };
        config.validate()?;
        GameSession::from_field(field, config, generator)
    } else {
        let config = FieldConfig {
            width: args.width,
            height: args.height,
            holes_percentage: args.holes,
        };
        GameSession::new(config, generator)?
    };

    let mut input = LineInput::new(io::stdin().lock());
    let mut renderer = TerminalRenderer::new(io::stdout());
    let outcome = session.run(&mut input, &mut renderer)?;

    match outcome {
        Outcome::Won => info!("player won"),
        Outcome::Lost => info!("player lost"),
    }
    Ok(())
}
