use crate::workflows::waste::domain::{WasteId, WasteItem, WasteStatus};
use crate::workflows::waste::repository::{InMemoryWasteRepository, WasteRepository};

fn organic(id: &str) -> WasteItem {
    WasteItem::organic(id, 100.0, 5).expect("valid organic")
}

#[test]
fn keeps_insertion_order() {
    let repository = InMemoryWasteRepository::new();
    repository.save(organic("L003")).expect("save");
    repository.save(organic("L001")).expect("save");
    repository.save(organic("L002")).expect("save");

    let ids: Vec<_> = repository
        .all()
        .expect("all")
        .iter()
        .map(|item| item.id().to_string())
        .collect();
    assert_eq!(ids, ["L003", "L001", "L002"]);
}

#[test]
fn empty_repository_lists_nothing() {
    let repository = InMemoryWasteRepository::new();
    assert!(repository.all().expect("all").is_empty());
    assert_eq!(repository.count().expect("count"), 0);
    assert_eq!(
        repository.get_by_id(&WasteId::from("L404")).expect("lookup"),
        None
    );
}

#[test]
fn duplicates_are_stored_and_lookups_return_first_match() {
    let repository = InMemoryWasteRepository::new();
    repository.save(organic("L001")).expect("save");
    repository
        .save(WasteItem::medical("L001", 20.0, 2).expect("valid medical"))
        .expect("duplicate save is accepted");

    assert_eq!(repository.count().expect("count"), 2);
    let found = repository
        .get_by_id(&WasteId::from("L001"))
        .expect("lookup")
        .expect("present");
    assert_eq!(found.volume(), 100.0);
}

#[test]
fn save_if_absent_refuses_known_ids() {
    let repository = InMemoryWasteRepository::new();
    assert!(repository.save_if_absent(organic("L001")).expect("save"));
    assert!(!repository.save_if_absent(organic("L001")).expect("save"));
    assert_eq!(repository.count().expect("count"), 1);
}

#[test]
fn update_mutates_stored_item_in_place() {
    let repository = InMemoryWasteRepository::new();
    repository.save(organic("L001")).expect("save");

    let message = repository
        .update(&WasteId::from("L001"), |item| item.process())
        .expect("update");
    assert_eq!(message.as_deref(), Some("organic waste converted to compost"));

    let stored = repository
        .get_by_id(&WasteId::from("L001"))
        .expect("lookup")
        .expect("present");
    assert_eq!(stored.status(), WasteStatus::Recycled);

    let missing = repository
        .update(&WasteId::from("L404"), |item| item.process())
        .expect("update");
    assert_eq!(missing, None);
}

#[test]
fn repositories_never_share_state() {
    let first = InMemoryWasteRepository::new();
    let second = InMemoryWasteRepository::new();
    first.save(organic("L001")).expect("save");

    assert_eq!(first.count().expect("count"), 1);
    assert_eq!(second.count().expect("count"), 0);
}
