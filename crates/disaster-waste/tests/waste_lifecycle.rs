use std::sync::Arc;
use std::thread;

use disaster_waste::config::RegistryConfig;
use disaster_waste::workflows::waste::{
    InMemoryWasteRepository, Officer, TransportService, ValidationError, WasteError,
    WasteRepository, WasteService, WasteStatus,
};

fn services() -> (
    Arc<InMemoryWasteRepository>,
    WasteService<InMemoryWasteRepository>,
    TransportService<InMemoryWasteRepository>,
) {
    let repository = Arc::new(InMemoryWasteRepository::new());
    let waste = WasteService::with_config(repository.clone(), RegistryConfig::default());
    let transport = TransportService::new(repository.clone());
    (repository, waste, transport)
}

#[test]
fn registration_transport_and_processing_share_one_registry() {
    let (_, waste, transport) = services();

    waste
        .register_organic("L001", 100.0, 5)
        .expect("organic registers");
    waste
        .register_medical("L002", 50.0, 8)
        .expect("medical registers");
    waste
        .register_hazardous("L003", 30.0, "Mercury")
        .expect("hazardous registers");
    assert_eq!(waste.compute_total_risk().expect("risk"), 1060.0);

    let officer = Officer::new("P001", "Ahmad", "Hauling").expect("valid officer");
    let record = transport
        .transport("L002", "Ambulance truck", "Incinerator")
        .expect("transport succeeds");
    assert_eq!(record.waste_id.as_str(), "L002");
    assert_eq!(officer.info()["name"], "Ahmad");

    let seen_by_waste_service = waste
        .find_by_id("L002")
        .expect("lookup")
        .expect("present");
    assert_eq!(seen_by_waste_service.status(), WasteStatus::Transporting);

    let message = waste.process_waste("L002").expect("processing succeeds");
    assert!(message.contains("incinerator"));

    match transport.transport("L002", "Truck", "Depot") {
        Err(WasteError::Validation(ValidationError::TerminalStatus { status, .. })) => {
            assert_eq!(status, WasteStatus::Destroyed)
        }
        other => panic!("expected refusal, got {other:?}"),
    }

    let report = waste.risk_report().expect("report");
    assert_eq!(report.item_count(), 3);
    assert_eq!(report.awaiting_processing(), 2);
}

#[test]
fn concurrent_transport_never_overrides_processing() {
    for _ in 0..16 {
        let (repository, waste, transport) = services();
        waste
            .register_organic("L001", 100.0, 5)
            .expect("organic registers");

        let waste = Arc::new(waste);
        let transport = Arc::new(transport);

        let handles: Vec<_> = (0..4)
            .map(|lane| {
                let transport = Arc::clone(&transport);
                let destination = format!("Site {lane}");
                thread::spawn(move || transport.transport("L001", "Truck", &destination))
            })
            .collect();
        let processor = {
            let waste = Arc::clone(&waste);
            thread::spawn(move || waste.process_waste("L001"))
        };

        processor
            .join()
            .expect("processor thread")
            .expect("processing succeeds");
        for handle in handles {
            match handle.join().expect("transport thread") {
                Ok(record) => assert_eq!(record.new_status, WasteStatus::Transporting),
                Err(WasteError::Validation(ValidationError::TerminalStatus { .. })) => {}
                Err(other) => panic!("unexpected transport failure: {other}"),
            }
        }

        let stored = repository
            .all()
            .expect("all")
            .into_iter()
            .next()
            .expect("present");
        assert_eq!(stored.status(), WasteStatus::Recycled);
    }
}

#[test]
fn concurrent_registrations_are_all_kept() {
    let (repository, waste, _) = services();
    let waste = Arc::new(waste);

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let waste = Arc::clone(&waste);
            thread::spawn(move || waste.register_medical(&format!("M{n:03}"), 5.0, 2))
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .expect("registration thread")
            .expect("registration succeeds");
    }

    assert_eq!(repository.count().expect("count"), 8);
    assert_eq!(waste.compute_total_risk().expect("risk"), 8.0 * 15.0);
}
