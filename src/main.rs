use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use subflix_icons::{driver, IconSetConfig};

/// Create the SubFlix placeholder icons (16, 48 and 128 px)
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory to write the icons into [default: assets/icons under the crate root]
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.out_dir {
        Some(dir) => IconSetConfig::with_out_dir(dir),
        None => IconSetConfig::default(),
    };

    let capability = subflix_icons::detect();
    let mut stdout = std::io::stdout().lock();
    driver::run(capability, &config, &mut stdout)
        .with_context(|| format!("failed to create icons in {}", config.out_dir.display()))?;
    Ok(())
}
