//! CLI for field generation

use clap::Parser;
use find_your_hat::field_generator::FieldGenerator;
use find_your_hat::FieldConfig;

/// Field generator for find your hat
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field width
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Generated field height
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Fraction of the field covered by holes, in [0, 1)
    #[arg(long, default_value_t = 0.2)]
    holes: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate one field, print it in the text form accepted by `--field`
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = FieldConfig {
        width: args.width,
        height: args.height,
        holes_percentage: args.holes,
    };

    let mut gen = FieldGenerator::new(args.seed);
    let field = gen.generate(&config)?;
    println!("{}", field);
    Ok(())
}
