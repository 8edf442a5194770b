use crate::infra::{render_inventory, render_report, render_transport, WasteDesk};
use clap::Args;
use disaster_waste::config::AppConfig;
use disaster_waste::error::AppError;
use disaster_waste::workflows::waste::{Location, Officer, ValidationError, WasteError};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Args, Debug, Default)]
pub(crate) struct SessionArgs {
    /// Print transport records as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Reject registrations whose waste id is already in the registry
    #[arg(long)]
    pub(crate) unique_ids: bool,
}

pub(crate) fn run_session(config: &AppConfig, args: SessionArgs) -> Result<(), AppError> {
    let mut registry = config.registry;
    registry.enforce_unique_ids |= args.unique_ids;

    let desk = WasteDesk::new(registry);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&desk, stdin.lock(), stdout.lock(), args.json).run()
}

/// Failure of a single menu action. Everything except I/O is reported to
/// the operator and the menu continues.
#[derive(Debug, thiserror::Error)]
enum ActionError {
    #[error("'{raw}' is not a valid {expected}")]
    Parse { raw: String, expected: &'static str },
    #[error(transparent)]
    Context(#[from] ValidationError),
    #[error(transparent)]
    Waste(#[from] WasteError),
    #[error("input closed")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

const MENU: &str = "\
=== WASTE MANAGEMENT MENU ===
1. Add organic waste
2. Add medical waste
3. Add hazardous (B3) waste
4. List all waste
5. Transport waste
6. Process waste
7. Risk report
0. Exit";

pub(crate) struct Session<'a, I, O> {
    desk: &'a WasteDesk,
    input: I,
    output: O,
    json: bool,
}

impl<'a, I, O> Session<'a, I, O>
where
    I: BufRead,
    O: Write,
{
    pub(crate) fn new(desk: &'a WasteDesk, input: I, output: O, json: bool) -> Self {
        Self {
            desk,
            input,
            output,
            json,
        }
    }

    pub(crate) fn run(&mut self) -> Result<(), AppError> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let choice = match self.prompt("Choose an option: ") {
                Ok(choice) => choice,
                Err(ActionError::EndOfInput) => break,
                Err(ActionError::Io(err)) => return Err(err.into()),
                Err(other) => return Err(io::Error::other(other).into()),
            };

            let outcome = match choice.trim() {
                "1" => self.add_organic(),
                "2" => self.add_medical(),
                "3" => self.add_hazardous(),
                "4" => self.list_waste(),
                "5" => self.transport(),
                "6" => self.process(),
                "7" => self.report(),
                "0" => {
                    writeln!(self.output, "Session closed.")?;
                    break;
                }
                other => {
                    debug!(choice = other, "unknown menu option");
                    writeln!(self.output, "Unknown option.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(ActionError::EndOfInput) => break,
                Err(ActionError::Io(err)) => return Err(err.into()),
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, ActionError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ActionError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_volume(&mut self) -> Result<f64, ActionError> {
        let raw = self.prompt("Volume (kg): ")?;
        raw.trim().parse().map_err(|_| ActionError::Parse {
            raw,
            expected: "volume",
        })
    }

    fn prompt_level(&mut self, label: &str) -> Result<i64, ActionError> {
        let raw = self.prompt(label)?;
        raw.trim().parse().map_err(|_| ActionError::Parse {
            raw,
            expected: "whole number",
        })
    }

    fn prompt_location(&mut self) -> Result<Location, ActionError> {
        let id = self.prompt("Location id: ")?;
        let name = self.prompt("Location name: ")?;
        let disaster_type = self.prompt("Disaster type: ")?;
        Ok(Location::new(&id, &name, &disaster_type)?)
    }

    fn add_organic(&mut self) -> Result<(), ActionError> {
        let id = self.prompt("Waste id: ")?;
        let volume = self.prompt_volume()?;
        let decay_level = self.prompt_level("Decay level: ")?;
        let location = self.prompt_location()?;

        let item = self.desk.waste.register_organic(&id, volume, decay_level)?;
        writeln!(self.output, "Organic waste registered: {item}")?;
        writeln!(self.output, "Collected at: {location}")?;
        Ok(())
    }

    fn add_medical(&mut self) -> Result<(), ActionError> {
        let id = self.prompt("Waste id: ")?;
        let volume = self.prompt_volume()?;
        let infection_level = self.prompt_level("Infection level: ")?;
        let location = self.prompt_location()?;

        let item = self
            .desk
            .waste
            .register_medical(&id, volume, infection_level)?;
        writeln!(self.output, "Medical waste registered: {item}")?;
        writeln!(self.output, "Collected at: {location}")?;
        Ok(())
    }

    fn add_hazardous(&mut self) -> Result<(), ActionError> {
        let id = self.prompt("Waste id: ")?;
        let volume = self.prompt_volume()?;
        let chemical_content = self.prompt("Chemical content: ")?;
        let location = self.prompt_location()?;

        let item = self
            .desk
            .waste
            .register_hazardous(&id, volume, &chemical_content)?;
        writeln!(self.output, "Hazardous waste registered: {item}")?;
        writeln!(self.output, "Collected at: {location}")?;
        Ok(())
    }

    fn list_waste(&mut self) -> Result<(), ActionError> {
        let items = self.desk.waste.all_waste()?;
        render_inventory(&mut self.output, &items)?;
        Ok(())
    }

    fn transport(&mut self) -> Result<(), ActionError> {
        let waste_id = self.prompt("Waste id to transport: ")?;
        let officer_id = self.prompt("Officer id: ")?;
        let officer_name = self.prompt("Officer name: ")?;
        let expertise = self.prompt("Officer expertise: ")?;
        let officer = Officer::new(&officer_id, &officer_name, &expertise)?;
        let vehicle = self.prompt("Vehicle: ")?;
        let destination = self.prompt("Destination: ")?;

        let record = self
            .desk
            .transport
            .transport(&waste_id, &vehicle, &destination)?;
        render_transport(&mut self.output, &officer, &record, self.json)?;
        Ok(())
    }

    fn process(&mut self) -> Result<(), ActionError> {
        let id = self.prompt("Waste id to process: ")?;
        let message = self.desk.waste.process_waste(&id)?;
        writeln!(self.output, "Processing complete: {message}")?;
        Ok(())
    }

    fn report(&mut self) -> Result<(), ActionError> {
        let report = self.desk.waste.risk_report()?;
        render_report(&mut self.output, &report)?;
        Ok(())
    }
}
