use crate::infra::{render_inventory, render_report, render_transport, WasteDesk};
use clap::Args;
use disaster_waste::config::AppConfig;
use disaster_waste::error::AppError;
use disaster_waste::workflows::waste::{Location, Officer, WasteError};
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print transport records as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let desk = WasteDesk::new(config.registry);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    walkthrough(&desk, &mut out, args.json)
}

/// Registers one item of each kind, dispatches and processes them, and shows
/// that a processed item can no longer be transported.
fn walkthrough(desk: &WasteDesk, out: &mut impl Write, json: bool) -> Result<(), AppError> {
    writeln!(out, "Disaster waste walkthrough")?;

    let site = Location::new("LOK001", "West Jakarta", "Flood").map_err(WasteError::from)?;
    writeln!(out, "Collection site: {site}")?;

    desk.waste.register_organic("L001", 100.0, 5)?;
    desk.waste.register_medical("L002", 50.0, 8)?;
    desk.waste.register_hazardous("L003", 30.0, "Mercury")?;
    render_inventory(out, &desk.waste.all_waste()?)?;
    writeln!(out, "Total risk: {:.2}", desk.waste.compute_total_risk()?)?;

    let officer = Officer::new("P001", "Ahmad", "Medical waste hauling")
        .map_err(WasteError::from)?;
    let record = desk
        .transport
        .transport("L002", "Sealed truck", "Regional incinerator")?;
    render_transport(out, &officer, &record, json)?;

    writeln!(out, "Processing L002: {}", desk.waste.process_waste("L002")?)?;
    writeln!(out, "Processing L001: {}", desk.waste.process_waste("L001")?)?;

    match desk.transport.transport("L001", "Truck", "Compost yard") {
        Ok(_) => writeln!(out, "Unexpected: processed waste was dispatched")?,
        Err(err) => writeln!(out, "Transport of L001 refused: {err}")?,
    }

    render_report(out, &desk.waste.risk_report()?)?;
    Ok(())
}
