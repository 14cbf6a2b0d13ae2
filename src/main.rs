//! `basins` - render magnetic pendulum basins of attraction to a PNG.
//!
//! Usage:
//!     basins demos/four_magnets.toml -o four.png
//!     basins --passes 5

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pendulum_basins::render::Canvas;
use pendulum_basins::scan::{Color, ScanConfig, ScanDriver, ScanPhase};

/// Passes rendered when neither the flag nor the config sets a limit.
const FALLBACK_PASSES: u32 = 3;

/// Render magnetic pendulum basins of attraction
#[derive(Parser, Debug)]
#[command(name = "basins")]
#[command(version)]
#[command(about = "Render magnetic pendulum basins of attraction", long_about = None)]
struct Args {
    /// TOML scan configuration; built-in defaults when omitted
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "basins.png")]
    output: PathBuf,

    /// Refinement passes, overriding `max_passes` from the config
    #[arg(long)]
    passes: Option<u32>,
}

impl Args {
    fn load_config(&self) -> Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config at {}", path.display()))?;
                ScanConfig::from_toml_str(&text)
                    .with_context(|| format!("bad config in {}", path.display()))?
            }
            None => ScanConfig::default(),
        };
        match self.passes {
            Some(passes) => config.max_passes = Some(passes),
            None => {
                config.max_passes.get_or_insert(FALLBACK_PASSES);
            }
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.load_config()?;

    let side = (2.0 * config.half_extent * config.camera_zoom).ceil().max(1.0) as u32;
    let mut canvas = Canvas::new(side, side, Color::WHITE);
    let mut driver = ScanDriver::new(config).context("invalid scan configuration")?;

    let started = Instant::now();
    let mut batches = 0u64;
    while driver.advance(&mut canvas).phase == ScanPhase::Scanning {
        batches += 1;
    }
    driver.render(&mut canvas);

    info!(
        "{} passes, {} samples in {} batches ({} unresolved) in {:.2?}",
        driver.pass(),
        driver.classified(),
        batches,
        driver.unresolved(),
        started.elapsed()
    );

    canvas
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {} ({side}x{side})", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["basins"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.output, PathBuf::from("basins.png"));
        assert_eq!(args.passes, None);
        assert_eq!(args.load_config().unwrap().max_passes, Some(FALLBACK_PASSES));
    }

    #[test]
    fn flags_and_positional_config_parse() {
        let args =
            Args::try_parse_from(["basins", "--passes", "2", "-o", "out.png", "cfg.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cfg.toml")));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.passes, Some(2));
    }

    #[test]
    fn passes_flag_overrides_config() {
        let args = Args::try_parse_from(["basins", "--passes", "7"]).unwrap();
        assert_eq!(args.load_config().unwrap().max_passes, Some(7));
    }

    #[test]
    fn extra_positional_is_rejected() {
        let err = Args::try_parse_from(["basins", "a.toml", "out.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_not_read_as_a_config_path() {
        let err = Args::try_parse_from(["basins", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = Args::try_parse_from(["basins", "/nonexistent/basins.toml"]).unwrap();
        let err = args.load_config().unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
