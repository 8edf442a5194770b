use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{WasteCategory, WasteItem, WasteStatus};

/// Exposure totals for one waste category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryExposure {
    pub items: usize,
    pub volume: f64,
    pub risk: f64,
}

/// Aggregate risk and status picture across the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskReport {
    pub total_risk: f64,
    pub total_volume: f64,
    pub categories: BTreeMap<WasteCategory, CategoryExposure>,
    pub statuses: BTreeMap<WasteStatus, usize>,
}

impl RiskReport {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a WasteItem>,
    {
        let mut report = RiskReport::default();

        for item in items {
            let risk = item.compute_risk();
            report.total_risk += risk;
            report.total_volume += item.volume();

            let entry = report.categories.entry(item.category()).or_default();
            entry.items += 1;
            entry.volume += item.volume();
            entry.risk += risk;

            *report.statuses.entry(item.status()).or_default() += 1;
        }

        report
    }

    pub fn item_count(&self) -> usize {
        self.statuses.values().sum()
    }

    /// Items that still need processing.
    pub fn awaiting_processing(&self) -> usize {
        self.statuses
            .iter()
            .filter(|(status, _)| !status.is_terminal())
            .map(|(_, count)| count)
            .sum()
    }

    pub fn highest_risk_category(&self) -> Option<WasteCategory> {
        self.categories
            .iter()
            .max_by(|(_, a), (_, b)| a.risk.total_cmp(&b.risk))
            .map(|(category, _)| *category)
    }
}
