//! Runs a full icon set: banner, one render per size, closing summary.
//!
//! Output goes to any `Write` so the console text can be asserted in tests.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::{Capability, Error, IconSetConfig, RenderedIcon, Result};

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub out_dir: PathBuf,
    /// Icons written, in render order
    pub rendered: Vec<RenderedIcon>,
    /// True when the run only printed installation guidance
    pub fallback: bool,
}

/// Render every icon in `config` with the detected capability.
///
/// Directories are created by the renderer as each icon is written. Stops at
/// the first failure; icons already written stay on disk.
pub fn run<W: Write>(capability: Capability, config: &IconSetConfig, out: &mut W) -> Result<RunSummary> {
    let renderer = match capability {
        Capability::Ready(renderer) => renderer,
        Capability::Unavailable(instructions) => {
            info!("drawing capability unavailable, printing instructions");
            write!(out, "{}", instructions).map_err(console_error)?;
            return Ok(RunSummary {
                out_dir: config.out_dir.clone(),
                rendered: Vec::new(),
                fallback: true,
            });
        }
    };

    say(out, "Creating SubFlix placeholder icons...")?;

    let mut rendered = Vec::with_capacity(config.sizes.len());
    for spec in config.specs() {
        let icon = renderer.render(&spec)?;
        say(
            out,
            format_args!("✓ Created {} ({}x{})", icon.path.display(), icon.edge, icon.edge),
        )?;
        rendered.push(icon);
    }

    say(out, "\n✓ All icons created successfully!")?;
    say(out, format_args!("Icons are located in: {}", config.out_dir.display()))?;
    info!("{} icons written to {}", rendered.len(), config.out_dir.display());

    Ok(RunSummary {
        out_dir: config.out_dir.clone(),
        rendered,
        fallback: false,
    })
}

fn say<W: Write>(out: &mut W, line: impl fmt::Display) -> Result<()> {
    writeln!(out, "{}", line).map_err(console_error)
}

fn console_error(e: std::io::Error) -> Error {
    Error::io("<console>", e)
}
