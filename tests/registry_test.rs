use park_visits::lifecycle::ParkSystem;
use park_visits::model::{ParkCreate, ParkId, VisitCreate, VisitUpdate, VisitorCreate, VisitorId};
use park_visits::validation::ValidationError;

fn seeded() -> (ParkSystem, VisitorId, ParkId) {
    let mut system = ParkSystem::new();
    let park = system.create_park(ParkCreate::new("Yellowstone")).unwrap();
    let visitor = system.create_visitor(VisitorCreate::new("Ana")).unwrap();
    (system, visitor, park)
}

/// Each valid visit grows the registry by one and lands at the end.
#[test]
fn test_visits_are_appended_in_order() {
    let (mut system, ana, park) = seeded();

    for (n, start) in ["June 1st", "July 2nd", "August 3rd"].into_iter().enumerate() {
        let before = system.registry().len();
        let id = system.create_visit(VisitCreate::new(ana, park, start, "September 1st")).unwrap();

        assert_eq!(system.registry().len(), before + 1);
        let last = system.registry().iter().last().unwrap();
        assert_eq!(last.id(), id);
        assert_eq!(last.start_date(), start);
        assert_eq!(n + 1, system.registry().len());
    }
}

#[test]
fn test_rejected_visit_is_never_registered() {
    let (mut system, ana, park) = seeded();

    let cases = [
        (VisitCreate::new(ana, park, "September", "June 5th"), ValidationError::StartDate),
        (VisitCreate::new(ana, park, "June 1st", "13th Avenue"), ValidationError::EndDate),
        (VisitCreate::new(ana, park, "September 32nd", "June 5th"), ValidationError::StartDate),
        (VisitCreate::new(ana, park, "June 1st", "September 1th"), ValidationError::EndDate),
        (VisitCreate::new(ana, park, "Sep 1st", "June 5th"), ValidationError::StartDate),
        (VisitCreate::new(ana, park, "June 1st", "Jun 30th"), ValidationError::EndDate),
        (VisitCreate::new(ana, park, "September1st", "June 5th"), ValidationError::StartDate),
        (
            VisitCreate::new(VisitorId(7), park, "June 1st", "June 5th"),
            ValidationError::UnknownVisitor("visitor_7".into()),
        ),
        (
            VisitCreate::new(ana, ParkId(3), "June 1st", "June 5th"),
            ValidationError::UnknownPark("park_3".into()),
        ),
    ];

    for (params, expected) in cases {
        assert_eq!(system.create_visit(params), Err(expected));
    }
    assert!(system.registry().is_empty());
    assert!(system.most_visited().is_none());
}

#[test]
fn test_loose_ordinals_are_accepted() {
    let (mut system, ana, park) = seeded();

    system.create_visit(VisitCreate::new(ana, park, "September 11st", "September 12nd")).unwrap();
    assert_eq!(system.registry().len(), 1);
}

#[test]
fn test_visit_from_another_system_is_rejected() {
    let (mut system, _, _) = seeded();
    let mut other = ParkSystem::new();
    other.create_park(ParkCreate::new("Acadia")).unwrap();
    let stranger_park = other.create_park(ParkCreate::new("Denali")).unwrap();
    let ana = system.visitors().next().unwrap().id();

    let result = system.create_visit(VisitCreate::new(ana, stranger_park, "June 1st", "June 2nd"));
    assert_eq!(result, Err(ValidationError::UnknownPark("park_2".into())));
}

#[test]
fn test_update_visit_revalidates_and_keeps_position() {
    let (mut system, ana, yellowstone) = seeded();
    let ben = system.create_visitor(VisitorCreate::new("Ben")).unwrap();
    let zion = system.create_park(ParkCreate::new("Zion")).unwrap();

    let first = system.create_visit(VisitCreate::new(ana, yellowstone, "June 1st", "June 5th")).unwrap();
    system.create_visit(VisitCreate::new(ben, yellowstone, "July 2nd", "July 3rd")).unwrap();

    let bad = VisitUpdate { park: Some(zion), end_date: Some("June 31st".into()), ..Default::default() };
    assert_eq!(system.update_visit(first, bad), Err(ValidationError::EndDate));
    assert_eq!(system.visit(first).unwrap().park_id(), yellowstone);

    let good = VisitUpdate { visitor: Some(ben), park: Some(zion), ..Default::default() };
    let updated = system.update_visit(first, good).unwrap();
    assert_eq!((updated.visitor_id(), updated.park_id()), (ben, zion));

    assert_eq!(system.registry().iter().next().unwrap().id(), first);
    assert_eq!(system.registry().len(), 2);
    assert_eq!(system.visitor(ben).unwrap().trips().len(), 2);
    assert!(system.visitor(ana).unwrap().trips().is_empty());

    let missing = system.update_visit(park_visits::model::VisitId(99), VisitUpdate::default());
    assert_eq!(missing, Err(ValidationError::UnknownVisit("visit_99".into())));
}

#[test]
fn test_renamed_visitor_is_seen_through_visits() {
    let (mut system, ana, park) = seeded();
    system.create_visit(VisitCreate::new(ana, park, "June 1st", "June 5th")).unwrap();

    system.rename_visitor(ana, "Ana Maria").unwrap();

    let best = system.park(park).unwrap().best_visitor().unwrap();
    assert_eq!(best.name(), "Ana Maria");
}

#[test]
fn test_registry_snapshot_serializes_in_order() {
    let (mut system, ana, park) = seeded();
    system.create_visit(VisitCreate::new(ana, park, "June 1st", "June 5th")).unwrap();
    system.create_visit(VisitCreate::new(ana, park, "August 4th", "August 6th")).unwrap();

    let snapshot = serde_json::to_value(system.registry()).unwrap();
    assert_eq!(
        snapshot,
        serde_json::json!([
            { "id": 1, "visitor": 1, "park": 1, "start_date": "June 1st", "end_date": "June 5th" },
            { "id": 2, "visitor": 1, "park": 1, "start_date": "August 4th", "end_date": "August 6th" },
        ])
    );
}
