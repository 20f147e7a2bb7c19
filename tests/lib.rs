// Integration tests exercise the crate's public API. They only have access
// to items re-exported from the crate root or its public modules.

use caremap::*;

mod cli_argument_parsing_tests;
mod filter_state_tests;

#[test]
fn test_core_id_types() {
    let facility_id = FacilityId::new(101);
    assert_eq!(facility_id.to_string(), "FAC_101");

    let session_a = SessionId::new();
    let session_b = SessionId::new();
    assert_ne!(session_a, session_b);
    assert!(session_a.to_string().starts_with("SES_"));
}

#[test]
fn test_enum_types() {
    for space_type in SpaceType::ALL {
        assert!(!space_type.to_string().is_empty());
        assert_eq!(space_type.to_string().parse::<SpaceType>().unwrap(), space_type);
    }
    for method in AccessMethod::ALL {
        assert_eq!(method.to_string().parse::<AccessMethod>().unwrap(), method);
    }
    for size in SpaceSize::ALL {
        assert_eq!(size.to_string().parse::<SpaceSize>().unwrap(), size);
    }
}

#[test]
fn test_serialization_roundtrip() {
    let snapshot = FilterSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: FilterSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);

    let region = Region::around(Coordinate::new(25.0478, 121.5171), 0.01);
    let json = serde_json::to_string(&region).unwrap();
    let back: Region = serde_json::from_str(&json).unwrap();
    assert_eq!(back, region);
}

#[test]
fn test_icon_resolution_public_api() {
    assert_eq!(resolve_icon("nursing_room"), Some(MarkerIcon::NursingRoom));
    assert_eq!(resolve_icon("unknown_type"), None);
    assert_eq!(icon_for(SpaceType::AccessibleRestroom), MarkerIcon::AccessibleRestroom);
}

#[test]
fn test_label_providers_share_one_seam() {
    let static_labels = StaticSpaceTypeLabels;
    let descriptions = SpaceTypeDescriptions::load_bundled();

    // Both sources answer through the same trait; misses are None
    let providers: [&dyn LabelProvider; 2] = [&static_labels, &descriptions];
    for provider in providers {
        assert!(provider.label("nursing_room").is_some());
        assert!(provider.label("no_such_key").is_none());
    }
}

#[test]
fn test_bundled_datasets_available() {
    let store = DatasetStore::bundled().unwrap();
    assert!(!store.collection(DatasetKey::Default).is_empty());
    assert!(store.collection(DatasetKey::Searched).contains(FacilityId::new(101)));
}
