//! Integration tests for the advanced-filter state model

use caremap::{
    AccessMethod, FilterPanelState, FilterSnapshot, SpaceSize, SpaceType, TagAddOutcome,
    CAPACITY_MESSAGE, MAX_AMENITY_TAGS,
};

/// Toggling the same key twice returns the facet set to its prior value
#[test]
fn test_every_facet_toggle_is_an_involution() {
    let mut state = FilterPanelState::new();
    let before = state.snapshot();

    for space_type in SpaceType::ALL {
        state.toggle_space_type(space_type);
        state.toggle_space_type(space_type);
    }
    for method in AccessMethod::ALL {
        state.toggle_access_method(method);
        state.toggle_access_method(method);
    }
    for size in SpaceSize::ALL {
        state.toggle_space_size(size);
        state.toggle_space_size(size);
    }

    assert_eq!(state.snapshot(), before);
}

/// The amenity list length stays in [0, 10]; the 11th add is rejected with
/// the capacity message and leaves the list unchanged
#[test]
fn test_amenity_cap_boundary() {
    let mut state = FilterPanelState::new();

    for i in 0..MAX_AMENITY_TAGS {
        assert_eq!(state.add_amenity_tag(&format!("amenity-{}", i)), TagAddOutcome::Added);
        assert!(state.amenities().len() <= MAX_AMENITY_TAGS);
    }

    let before: Vec<String> = state.amenities().to_vec();
    assert_eq!(state.add_amenity_tag("amenity-overflow"), TagAddOutcome::Rejected);
    assert_eq!(state.amenities(), before);
    assert_eq!(state.capacity_message(), Some(CAPACITY_MESSAGE));
}

/// Dropping from 10 to 9 tags clears the capacity message
#[test]
fn test_removal_below_cap_clears_capacity_message() {
    let mut state = FilterPanelState::new();
    for i in 0..MAX_AMENITY_TAGS {
        state.add_amenity_tag(&format!("amenity-{}", i));
    }
    state.add_amenity_tag("amenity-overflow");
    assert!(state.capacity_message().is_some());

    assert!(state.remove_amenity_tag("amenity-0"));
    assert_eq!(state.amenities().len(), MAX_AMENITY_TAGS - 1);
    assert!(state.capacity_message().is_none());
}

/// reset_all always yields the default selections regardless of prior state
#[test]
fn test_reset_all_from_arbitrary_state() {
    let mut state = FilterPanelState::new();

    // Scramble everything
    state.toggle_space_type(SpaceType::NursingRoom);
    state.toggle_space_type(SpaceType::FamilyRestroom);
    state.toggle_access_method(AccessMethod::RegistrationRequired);
    state.toggle_space_size(SpaceSize::Spacious);
    state.toggle_space_size(SpaceSize::Narrow);
    for i in 0..=MAX_AMENITY_TAGS {
        state.add_amenity_tag(&format!("amenity-{}", i));
    }

    state.reset_all();

    let snapshot = state.snapshot();
    assert_eq!(snapshot, FilterSnapshot::default());
    assert_eq!(snapshot.space_types.len(), 3);
    assert_eq!(snapshot.access_methods.len(), 3);
    assert_eq!(snapshot.space_sizes.len(), 3);
    assert!(snapshot.amenities.is_empty());
    assert!(state.capacity_message().is_none());
}

/// Toggle off one space type, observe the remaining pair, then reset
#[test]
fn test_space_type_toggle_scenario() {
    let mut state = FilterPanelState::new();

    state.toggle_space_type(SpaceType::AccessibleRestroom);
    let selected: Vec<SpaceType> = state.space_types().iter().copied().collect();
    assert_eq!(selected, vec![SpaceType::NursingRoom, SpaceType::FamilyRestroom]);

    state.reset_all();
    let selected: Vec<SpaceType> = state.space_types().iter().copied().collect();
    assert_eq!(
        selected,
        vec![SpaceType::NursingRoom, SpaceType::FamilyRestroom, SpaceType::AccessibleRestroom]
    );
}

/// Tag insertion order is preserved for display
#[test]
fn test_amenity_tags_keep_insertion_order() {
    let mut state = FilterPanelState::new();
    state.add_amenity_tag("尿布檯");
    state.add_amenity_tag("洗手台");
    state.add_amenity_tag("飲水機");

    assert_eq!(
        state.amenities(),
        ["尿布檯".to_string(), "洗手台".to_string(), "飲水機".to_string()]
    );

    state.remove_amenity_tag("洗手台");
    assert_eq!(state.amenities(), ["尿布檯".to_string(), "飲水機".to_string()]);
}
