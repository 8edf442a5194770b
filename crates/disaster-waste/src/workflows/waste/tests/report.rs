use crate::workflows::waste::domain::{WasteCategory, WasteItem, WasteStatus};
use crate::workflows::waste::report::{CategoryExposure, RiskReport};

#[test]
fn empty_registry_reports_zero_exposure() {
    let report = RiskReport::from_items(std::iter::empty());
    assert_eq!(report.total_risk, 0.0);
    assert_eq!(report.item_count(), 0);
    assert_eq!(report.highest_risk_category(), None);
}

#[test]
fn groups_exposure_by_category_and_status() {
    let mut recycled = WasteItem::organic("L010", 10.0, 2).expect("valid organic");
    recycled.process();
    let items = vec![
        WasteItem::organic("L001", 100.0, 5).expect("valid organic"),
        recycled,
        WasteItem::medical("L002", 50.0, 8).expect("valid medical"),
        WasteItem::hazardous("L003", 30.0, "Mercury").expect("valid hazardous"),
    ];

    let report = RiskReport::from_items(&items);
    assert_eq!(report.total_risk, 1076.0);
    assert_eq!(report.total_volume, 190.0);
    assert_eq!(
        report.categories[&WasteCategory::Organic],
        CategoryExposure {
            items: 2,
            volume: 110.0,
            risk: 416.0
        }
    );
    assert_eq!(report.categories[&WasteCategory::Medical].risk, 600.0);
    assert_eq!(report.statuses[&WasteStatus::Registered], 3);
    assert_eq!(report.statuses[&WasteStatus::Recycled], 1);
    assert_eq!(report.awaiting_processing(), 3);
    assert_eq!(report.highest_risk_category(), Some(WasteCategory::Medical));
}
