use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use hold_rs::io::ext_repr::ExtManifest;
use hold_rs::navigator::SimulationSession;
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use crate::EPOCH;
use crate::config::LoadSimConfig;
use crate::io::output::SimOutput;

pub mod chart_svg;
pub mod cli;
pub mod output;
pub mod svg_util;

/// Writes `sim_<stem>.json` and, if enabled, `cmp_<stem>.svg` into `folder`
pub fn write_simulation(
    session: &SimulationSession,
    config: &LoadSimConfig,
    stem: &str,
    folder: &Path,
) -> Result<()> {
    if !folder.exists() {
        fs::create_dir_all(folder)
            .with_context(|| format!("could not create output folder: {}", folder.display()))?;
    }

    let output = SimOutput {
        simulation: hold_rs::io::export_session(session, Some(stem.to_string())),
        config: *config,
    };
    write_json(&output, &folder.join(format!("sim_{stem}.json")))?;

    if config.write_svg {
        let svg = chart_svg::comparison_to_svg(&session.comparison(), config.chart, stem);
        write_svg(&svg, &folder.join(format!("cmp_{stem}.svg")))?;
    }
    Ok(())
}

pub fn read_manifest(path: &Path) -> Result<ExtManifest> {
    read_json(path).with_context(|| format!("could not read manifest file: {}", path.display()))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!(
        "[IO] simulation written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] chart written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
