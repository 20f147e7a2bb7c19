//! Bundled facility datasets
//!
//! Two named collections ship with the application: `default` (shown on
//! launch) and `searched` (swapped in wholesale by a search submission).
//! Collections are immutable snapshots; there is no merging, paging, or
//! incremental patching.

use crate::error::{AppError, AppResult};
use crate::facility::model::Facility;
use crate::types::{DatasetKey, FacilityId};
use std::collections::HashMap;

/// Bundled JSON for the `default` collection
pub const DEFAULT_FIXTURE: &str = include_str!("../../fixtures/facilities_default.json");

/// Bundled JSON for the `searched` collection
pub const SEARCHED_FIXTURE: &str = include_str!("../../fixtures/facilities_searched.json");

/// An immutable snapshot of facilities with id lookup
#[derive(Debug, Clone)]
pub struct FacilityCollection {
    facilities: Vec<Facility>,
    index: HashMap<FacilityId, usize>,
}

impl FacilityCollection {
    /// Build a collection, validating that every `facility_id` is unique
    pub fn new(facilities: Vec<Facility>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(facilities.len());
        for (i, facility) in facilities.iter().enumerate() {
            if index.insert(facility.facility_id, i).is_some() {
                return Err(AppError::dataset_error(format!(
                    "duplicate facility_id {} in collection",
                    facility.facility_id
                )));
            }
        }
        Ok(Self { facilities, index })
    }

    /// Parse a collection from raw JSON
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let facilities: Vec<Facility> = serde_json::from_str(raw)?;
        Self::new(facilities)
    }

    /// All facilities in dataset order
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Look up a facility by id
    pub fn get(&self, id: FacilityId) -> Option<&Facility> {
        self.index.get(&id).map(|&i| &self.facilities[i])
    }

    /// Whether a facility id exists in the collection
    pub fn contains(&self, id: FacilityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of facilities
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

/// Both bundled collections, keyed for wholesale swapping
#[derive(Debug, Clone)]
pub struct DatasetStore {
    default: FacilityCollection,
    searched: FacilityCollection,
}

impl DatasetStore {
    /// Parse both bundled fixtures
    pub fn bundled() -> AppResult<Self> {
        Ok(Self {
            default: FacilityCollection::from_json(DEFAULT_FIXTURE)?,
            searched: FacilityCollection::from_json(SEARCHED_FIXTURE)?,
        })
    }

    /// Build a store from two pre-built collections (tests)
    pub fn new(default: FacilityCollection, searched: FacilityCollection) -> Self {
        Self { default, searched }
    }

    /// The collection for a dataset key
    pub fn collection(&self, key: DatasetKey) -> &FacilityCollection {
        match key {
            DatasetKey::Default => &self.default,
            DatasetKey::Searched => &self.searched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(id: i64, space_type: &str) -> Facility {
        Facility {
            facility_id: FacilityId::new(id),
            facility_name: format!("設施 {}", id),
            address: "測試地址".to_string(),
            space_type: space_type.to_string(),
            latitude: 24.8,
            longitude: 121.0,
        }
    }

    #[test]
    fn test_collection_lookup() {
        let collection =
            FacilityCollection::new(vec![facility(1, "nursing_room"), facility(2, "family_restroom")])
                .unwrap();

        assert_eq!(collection.len(), 2);
        assert!(collection.contains(FacilityId::new(1)));
        assert!(!collection.contains(FacilityId::new(3)));
        assert_eq!(collection.get(FacilityId::new(2)).unwrap().space_type, "family_restroom");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result =
            FacilityCollection::new(vec![facility(7, "nursing_room"), facility(7, "nursing_room")]);
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }

    #[test]
    fn test_bundled_fixtures_parse() {
        let store = DatasetStore::bundled().unwrap();

        assert!(!store.collection(DatasetKey::Default).is_empty());
        assert!(!store.collection(DatasetKey::Searched).is_empty());
    }

    #[test]
    fn test_searched_fixture_contains_taipei_main_station() {
        let store = DatasetStore::bundled().unwrap();
        let searched = store.collection(DatasetKey::Searched);

        let facility = searched.get(FacilityId::new(101)).expect("facility 101 present");
        assert_eq!(facility.latitude, 25.0478);
        assert_eq!(facility.longitude, 121.5171);
    }

    #[test]
    fn test_default_fixture_keeps_unrecognized_category() {
        let store = DatasetStore::bundled().unwrap();
        let default = store.collection(DatasetKey::Default);

        // One record deliberately carries a category outside the closed set
        let unknown =
            default.facilities().iter().find(|f| f.space_type().is_none());
        assert!(unknown.is_some());
    }
}
