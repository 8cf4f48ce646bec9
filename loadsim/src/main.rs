use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use hold_rs::navigator::SimulationSession;
use hold_rs::strategies::StrategyId;
use loadsim::config::LoadSimConfig;
use loadsim::io::cli::Cli;
use loadsim::stepper::StepperExit;
use loadsim::{EPOCH, io, render, setup, stepper};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: LoadSimConfig = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            LoadSimConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed LoadSimConfig: {config:?}");

    let (mut manifest, stem) = args.manifest()?;
    info!("[MAIN] cargo manifest:\n{}", render::cargo_table(&manifest));

    match args.interactive {
        true => {
            let mut input = std::io::stdin().lock();
            let mut output = std::io::stdout();
            // every started simulation is written, `back` returns to the setup
            while let Some(mut session) = setup::run_setup(&mut manifest, &mut input, &mut output)? {
                let exit = stepper::run_interactive(&mut session, &config, &mut input, &mut output)?;
                io::write_simulation(&session, &config, &stem, &args.output_folder)?;
                if exit == StepperExit::Quit {
                    break;
                }
            }
        }
        false => {
            let session = SimulationSession::start(&manifest)?;
            replay(&session, &config);
            io::write_simulation(&session, &config, &stem, &args.output_folder)?;
        }
    }

    info!(
        "[MAIN] finished in {:.3}ms",
        EPOCH.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

/// Logs every step of both strategies, followed by the comparison
fn replay(session: &SimulationSession, config: &LoadSimConfig) {
    let capacity = session.instance().capacity();
    for strategy in StrategyId::ALL {
        info!("[SIM] {}", render::strategy_banner(strategy));
        for (i, step) in session.sequence(strategy).iter().enumerate() {
            info!("[SIM] [{i}] {}", render::step_view(step, capacity, config));
        }
    }
    info!("[SIM] {}", render::comparison_view(&session.comparison(), config));
}
