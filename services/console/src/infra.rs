use disaster_waste::config::RegistryConfig;
use disaster_waste::workflows::waste::{
    InMemoryWasteRepository, Officer, RiskReport, TransportRecord, TransportService, WasteItem,
    WasteService,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::Arc;

/// Services wired over one shared in-memory registry for the lifetime of
/// the process.
pub(crate) struct WasteDesk {
    pub(crate) waste: WasteService<InMemoryWasteRepository>,
    pub(crate) transport: TransportService<InMemoryWasteRepository>,
}

impl WasteDesk {
    pub(crate) fn new(config: RegistryConfig) -> Self {
        let repository = Arc::new(InMemoryWasteRepository::new());
        Self {
            waste: WasteService::with_config(repository.clone(), config),
            transport: TransportService::new(repository),
        }
    }
}

#[derive(Serialize)]
struct TransportReceipt<'a> {
    officer: BTreeMap<&'static str, String>,
    record: &'a TransportRecord,
}

pub(crate) fn render_transport(
    out: &mut impl Write,
    officer: &Officer,
    record: &TransportRecord,
    json: bool,
) -> io::Result<()> {
    if json {
        let receipt = TransportReceipt {
            officer: officer.info(),
            record,
        };
        let body = serde_json::to_string_pretty(&receipt).map_err(io::Error::other)?;
        return writeln!(out, "{body}");
    }

    writeln!(out, "Transport dispatched.")?;
    writeln!(out, "Responsible officer:")?;
    for (key, value) in officer.info() {
        writeln!(out, "  {key}: {value}")?;
    }
    writeln!(out, "Transport record:")?;
    writeln!(out, "  timestamp: {}", record.timestamp_label())?;
    writeln!(out, "  waste_id: {}", record.waste_id)?;
    writeln!(out, "  volume: {:?}", record.volume)?;
    writeln!(out, "  new_status: {}", record.new_status)?;
    writeln!(out, "  vehicle: {}", record.vehicle)?;
    writeln!(out, "  destination: {}", record.destination)
}

pub(crate) fn render_inventory(out: &mut impl Write, items: &[WasteItem]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No waste registered yet.");
    }

    writeln!(out, "--- WASTE REGISTRY ---")?;
    for item in items {
        writeln!(out, "{item} risk={:.2}", item.compute_risk())?;
    }
    Ok(())
}

pub(crate) fn render_report(out: &mut impl Write, report: &RiskReport) -> io::Result<()> {
    writeln!(out, "--- RISK REPORT ---")?;
    writeln!(
        out,
        "items: {} (awaiting processing: {})",
        report.item_count(),
        report.awaiting_processing()
    )?;
    writeln!(out, "total volume: {:.2} kg", report.total_volume)?;
    writeln!(out, "total risk: {:.2}", report.total_risk)?;
    for (category, exposure) in &report.categories {
        writeln!(
            out,
            "  {:<10} items={} volume={:.2} risk={:.2}",
            category.label(),
            exposure.items,
            exposure.volume,
            exposure.risk
        )?;
    }
    for (status, count) in &report.statuses {
        writeln!(out, "  status {status}: {count}")?;
    }
    if let Some(category) = report.highest_risk_category() {
        writeln!(out, "highest exposure: {}", category.label())?;
    }
    Ok(())
}
