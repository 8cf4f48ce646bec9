use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use clap::Parser;
use hold_rs::manifest::CargoManifest;
use log::{LevelFilter, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Manifest with the capacity and cargo to load
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    /// Start from the demonstration cargo instead of a manifest file
    #[arg(long, conflicts_with = "input_file")]
    pub sample: bool,
    /// Overrides the capacity of the manifest
    #[arg(long, value_name = "TONS")]
    pub capacity: Option<f64>,
    /// Additional cargo, appended to the manifest
    #[arg(long = "cargo", value_name = "NAME:WEIGHT:PROFIT")]
    pub cargo: Vec<String>,
    #[arg(short, long, value_name = "FOLDER", default_value = "output")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Step through the strategies with commands read from stdin
    #[arg(long)]
    pub interactive: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Assembles the manifest described by the arguments, together with a stem to name the output files after.
    /// Without an input file or any `--cargo`, the demonstration cargo is used.
    pub fn manifest(&self) -> Result<(CargoManifest, String)> {
        let (mut manifest, stem) = match (&self.input_file, self.sample) {
            (Some(path), _) => {
                let ext_manifest = super::read_manifest(path)?;
                let manifest = hold_rs::io::import(&ext_manifest)?;
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("manifest")
                    .to_string();
                (manifest, stem)
            }
            (None, true) => (CargoManifest::with_sample_data(), "sample".to_string()),
            (None, false) if self.cargo.is_empty() => {
                warn!("[MAIN] no manifest provided, use --input-file or --cargo to load custom cargo");
                (CargoManifest::with_sample_data(), "sample".to_string())
            }
            (None, false) => (CargoManifest::default(), "custom".to_string()),
        };

        if let Some(capacity) = self.capacity {
            ensure!(
                capacity.is_finite(),
                "--capacity must be a finite number, got {capacity}"
            );
            info!("[MAIN] capacity overridden to {capacity} tons");
            manifest.set_capacity(capacity);
        }
        for arg in &self.cargo {
            let (name, weight, profit) = split_cargo_arg(arg)?;
            manifest
                .add_from_fields(name, weight, profit)
                .with_context(|| format!("invalid --cargo argument '{arg}'"))?;
        }

        Ok((manifest, stem))
    }
}

/// Splits a `NAME:WEIGHT:PROFIT` argument into its textual fields.
/// The name itself may contain colons.
pub fn split_cargo_arg(arg: &str) -> Result<(&str, &str, &str)> {
    let mut fields = arg.rsplitn(3, ':');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(profit), Some(weight), Some(name)) => Ok((name, weight, profit)),
        _ => Err(anyhow!("expected NAME:WEIGHT:PROFIT, got '{arg}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hold_rs::util::PALETTE;

    #[test]
    fn cargo_arg_is_split_from_the_right() {
        assert_eq!(
            split_cargo_arg("Tea: Assam:4:30").unwrap(),
            ("Tea: Assam", "4", "30")
        );
        assert!(split_cargo_arg("Tea:4").is_err());
    }

    #[test]
    fn cargo_args_extend_the_sample() {
        let cli = Cli::parse_from([
            "loadsim",
            "--sample",
            "--capacity",
            "60",
            "--cargo",
            "Tea:4:30",
        ]);
        let (manifest, stem) = cli.manifest().unwrap();
        assert_eq!(stem, "sample");
        assert_eq!(manifest.capacity(), 60.0);
        assert_eq!(manifest.len(), 5);
        assert_eq!(manifest.items()[4].color(), PALETTE[4]);
    }

    #[test]
    fn cargo_args_alone_start_from_an_empty_manifest() {
        let cli = Cli::parse_from(["loadsim", "--cargo", "Tea:4:30", "--cargo", "Salt:10:5"]);
        let (manifest, stem) = cli.manifest().unwrap();
        assert_eq!(stem, "custom");
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn non_finite_capacity_is_rejected() {
        let cli = Cli::parse_from(["loadsim", "--sample", "--capacity", "inf"]);
        assert!(cli.manifest().is_err());
    }

    #[test]
    fn invalid_cargo_arg_is_rejected() {
        let cli = Cli::parse_from(["loadsim", "--cargo", "Tea:-4:30"]);
        assert!(cli.manifest().is_err());
    }
}
