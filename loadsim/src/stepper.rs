use std::io::{BufRead, Write};

use anyhow::Result;
use hold_rs::navigator::{NavCommand, SimulationSession};
use log::debug;

use crate::config::LoadSimConfig;
use crate::render;

const PROMPT: &str = "(n)ext (p)rev (r)eset (g)reedy nai(v)e (c)ompare (b)ack (q)uit > ";

/// How the user left the stepper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepperExit {
    /// Return to editing the cargo
    Back,
    /// Leave the program, also on end of input
    Quit,
}

/// Steps through the session with commands read line by line from `input`.
/// The comparison is shown whenever the active strategy reaches its final step.
pub fn run_interactive(
    session: &mut SimulationSession,
    config: &LoadSimConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<StepperExit> {
    writeln!(output, "{}", render::session_view(session, config))?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            return Ok(StepperExit::Quit);
        };
        let command = match line.parse::<NavCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        debug!("[STEPPER] {command}");

        if !session.apply(command) {
            return Ok(match command {
                NavCommand::Back => StepperExit::Back,
                _ => StepperExit::Quit,
            });
        }

        if command != NavCommand::Compare {
            writeln!(output, "{}", render::session_view(session, config))?;
        }
        if command == NavCommand::Compare || session.navigator().is_at_end() {
            writeln!(
                output,
                "{}",
                render::comparison_view(&session.comparison(), config)
            )?;
        }
    }
}

/// Next line of `input` without its line ending, `None` at the end of the input
pub(crate) fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
    }
}
