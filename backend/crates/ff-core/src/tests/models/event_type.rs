use crate::{EventType, TransferEvent, User};

use std::str::FromStr;

#[test]
fn test_event_type_round_trips_through_str() {
    for event_type in [EventType::FeaturesImported, EventType::FeaturesExported] {
        assert_eq!(EventType::from_str(event_type.as_str()).unwrap(), event_type);
    }
    assert!(EventType::from_str("features-deleted").is_err());
}

#[test]
fn test_features_imported_event_tags_destination() {
    let user = User::new("alice");

    let event = TransferEvent::features_imported("default", "production", &user);

    assert_eq!(event.event_type, EventType::FeaturesImported);
    assert_eq!(event.created_by, "alice");
    assert_eq!(event.project.as_deref(), Some("default"));
    assert_eq!(event.environment.as_deref(), Some("production"));
    assert!(event.data.is_none());
}
