use super::*;

// =============================================================
// Wire format
// =============================================================

#[test]
fn payload_serializes_to_the_exact_wire_body() {
    let payload = EquipmentPayload {
        name: "Truck 1".to_owned(),
        kind: EquipmentKind::Truck,
        status: EquipmentStatus::Active,
        image_url: "https://example.com/a.png".to_owned(),
    };
    let body = serde_json::to_value(&payload).expect("serializable payload");
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Truck 1",
            "type": "Truck",
            "status": "Active",
            "imageUrl": "https://example.com/a.png"
        })
    );
}

#[test]
fn record_deserializes_from_wire_json() {
    let record: EquipmentRecord = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Excavator 9",
        "type": "Excavator",
        "status": "Parked at Workshop",
        "imageUrl": "https://example.com/e9.png"
    }))
    .expect("wire record");

    assert_eq!(record.id, 3);
    assert_eq!(record.kind, EquipmentKind::Excavator);
    assert_eq!(record.status, EquipmentStatus::ParkedAtWorkshop);
}

#[test]
fn status_wire_values_are_spelled_out() {
    let json = serde_json::to_value(EquipmentStatus::UnderMaintenance).expect("serializable");
    assert_eq!(json, serde_json::json!("Under Maintenance"));

    let json = serde_json::to_value(EquipmentStatus::ParkedAtWorkshop).expect("serializable");
    assert_eq!(json, serde_json::json!("Parked at Workshop"));
}

// =============================================================
// Labels and parsing
// =============================================================

#[test]
fn kind_labels_round_trip_through_from_str() {
    for kind in EquipmentKind::ALL {
        assert_eq!(kind.as_str().parse::<EquipmentKind>(), Ok(kind));
    }
}

#[test]
fn status_labels_round_trip_through_from_str() {
    for status in EquipmentStatus::ALL {
        assert_eq!(status.as_str().parse::<EquipmentStatus>(), Ok(status));
    }
}

#[test]
fn unknown_values_are_rejected_with_the_offending_input() {
    let err = "Bulldozer".parse::<EquipmentKind>().expect_err("not a kind");
    assert_eq!(err, UnknownVariant("Bulldozer".to_owned()));
    assert_eq!(err.to_string(), "unrecognized value: Bulldozer");

    assert!("active".parse::<EquipmentStatus>().is_err());
}

#[test]
fn display_matches_the_wire_label() {
    assert_eq!(EquipmentKind::Crane.to_string(), "Crane");
    assert_eq!(EquipmentStatus::UnderMaintenance.to_string(), "Under Maintenance");
}
