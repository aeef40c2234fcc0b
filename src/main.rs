use anyhow::Result;
use clap::Parser;
use placeholder_icons::logging::{init_logging, LoggingConfig};
use placeholder_icons::{icon_gen, IconConfig};

/// Sizes, colors and the output directory are fixed; the flags only
/// affect what gets printed.
#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    version,
    about = "Generate placeholder icons (16, 48 and 128 px) into ./icons"
)]
struct Args {
    /// Print debug output while generating.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        level: if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
    });

    let report = icon_gen::generate(&IconConfig::default())?;
    log::debug!(
        "{} icons written, {} degraded",
        report.icons.len(),
        report.degraded().count()
    );

    Ok(())
}
