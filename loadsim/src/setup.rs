//! Editing of the cargo manifest before a simulation starts.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail, ensure};
use hold_rs::manifest::CargoManifest;
use hold_rs::navigator::SimulationSession;
use log::debug;

use crate::io::cli::split_cargo_arg;
use crate::render;
use crate::stepper::read_line;

const PROMPT: &str = "(a)dd NAME:WEIGHT:PROFIT | (rm) remove N | (cap)acity TONS | (l)ist | (s)tart | (q)uit > ";

#[derive(Clone, Debug, PartialEq)]
pub enum SetupCommand {
    /// `NAME:WEIGHT:PROFIT`, validated when the cargo is added
    Add(String),
    Remove(usize),
    Capacity(f64),
    List,
    Start,
    Quit,
}

impl FromStr for SetupCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (head, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        let cmd = match head.to_ascii_lowercase().as_str() {
            "add" | "a" => {
                ensure!(!rest.is_empty(), "usage: add NAME:WEIGHT:PROFIT");
                SetupCommand::Add(rest.to_string())
            }
            "remove" | "rm" => SetupCommand::Remove(
                rest.parse()
                    .with_context(|| format!("invalid cargo position '{rest}'"))?,
            ),
            "capacity" | "cap" => {
                let capacity: f64 = rest
                    .parse()
                    .with_context(|| format!("invalid capacity '{rest}'"))?;
                ensure!(capacity.is_finite(), "capacity must be finite, got {capacity}");
                SetupCommand::Capacity(capacity)
            }
            "list" | "l" | "" => SetupCommand::List,
            "start" | "s" => SetupCommand::Start,
            "quit" | "q" => SetupCommand::Quit,
            other => bail!("unknown command '{other}' (add, remove, capacity, list, start, quit)"),
        };
        Ok(cmd)
    }
}

/// Edits `manifest` with commands read from `input` until a simulation is started.
/// Returns `None` on `quit` or at the end of the input.
pub fn run_setup(
    manifest: &mut CargoManifest,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<SimulationSession>> {
    writeln!(output, "{}", render::cargo_table(manifest))?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            return Ok(None);
        };
        let command = match line.parse::<SetupCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err:#}")?;
                continue;
            }
        };
        debug!("[SETUP] {command:?}");

        match command {
            SetupCommand::Add(arg) => match add_cargo(manifest, &arg) {
                Ok(()) => writeln!(output, "{}", render::cargo_table(manifest))?,
                Err(err) => writeln!(output, "{err:#}")?,
            },
            SetupCommand::Remove(index) => match manifest.remove(index) {
                Some(item) => {
                    writeln!(output, "removed {}", item.name)?;
                    writeln!(output, "{}", render::cargo_table(manifest))?;
                }
                None => writeln!(output, "no cargo at position {index}")?,
            },
            SetupCommand::Capacity(capacity) => {
                manifest.set_capacity(capacity);
                writeln!(output, "ship capacity: {capacity} tons")?;
            }
            SetupCommand::List => writeln!(output, "{}", render::cargo_table(manifest))?,
            SetupCommand::Start => match SimulationSession::start(manifest) {
                Ok(session) => return Ok(Some(session)),
                Err(err) => writeln!(output, "{err}")?,
            },
            SetupCommand::Quit => return Ok(None),
        }
    }
}

fn add_cargo(manifest: &mut CargoManifest, arg: &str) -> Result<()> {
    let (name, weight, profit) = split_cargo_arg(arg)?;
    manifest
        .add_from_fields(name, weight, profit)
        .with_context(|| format!("could not add '{arg}'"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_case::test_case;

    fn run_script(manifest: &mut CargoManifest, script: &str) -> (Option<SimulationSession>, String) {
        let mut output = Vec::new();
        let session = run_setup(manifest, &mut Cursor::new(script.to_string()), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test_case("add Tea:4:30", SetupCommand::Add("Tea:4:30".into()); "add")]
    #[test_case("rm 2", SetupCommand::Remove(2); "remove")]
    #[test_case("CAP 12.5", SetupCommand::Capacity(12.5); "capacity")]
    #[test_case("", SetupCommand::List; "empty line")]
    #[test_case("s", SetupCommand::Start; "start")]
    fn commands_parse(input: &str, expected: SetupCommand) {
        assert_eq!(input.parse::<SetupCommand>().unwrap(), expected);
    }

    #[test_case("add"; "add without cargo")]
    #[test_case("rm first"; "non numeric position")]
    #[test_case("capacity inf"; "infinite capacity")]
    #[test_case("launch"; "unknown")]
    fn invalid_commands_are_rejected(input: &str) {
        assert!(input.parse::<SetupCommand>().is_err());
    }

    #[test]
    fn edits_are_applied_before_the_start() {
        let mut manifest = CargoManifest::with_sample_data();
        let (session, _) = run_script(&mut manifest, "rm 3\nadd Tea:4:30\ncap 20\nstart\n");

        let session = session.unwrap();
        assert_eq!(session.instance().capacity(), 20.0);
        let names = session
            .instance()
            .items()
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Copper Coils", "Rice Bags", "Machinery Parts", "Tea"]);
    }

    #[test]
    fn refused_start_keeps_the_setup_open() {
        let mut manifest = CargoManifest::new(50.0);
        let (session, out) = run_script(&mut manifest, "start\nrm 0\nadd Tea:-4:30\nadd Tea:4:30\ns\n");

        assert!(out.contains("cannot start a simulation without cargo"));
        assert!(out.contains("no cargo at position 0"));
        assert!(out.contains("could not add 'Tea:-4:30'"));
        assert_eq!(session.unwrap().instance().items().len(), 1);
    }

    #[test]
    fn end_of_input_leaves_without_a_session() {
        let mut manifest = CargoManifest::with_sample_data();
        let (session, _) = run_script(&mut manifest, "list\n");
        assert!(session.is_none());
    }
}
