//! Request payloads for district mutations.
//!
//! Pure data types plus the update merge; no I/O.

use serde::{Deserialize, Serialize};

use super::types::District;

/// Request payload for creating a district. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDistrict {
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// Request payload for updating a district.
///
/// A field that is missing (or `null`) keeps the stored value. Any supplied
/// value overwrites it, including `0` and the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cured: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<i64>,
}

impl DistrictPatch {
    /// Returns the district that results from applying this patch to `existing`.
    ///
    /// The identifier is never touched.
    pub fn apply_to(self, existing: &District) -> District {
        District {
            district_id: existing.district_id,
            district_name: self
                .district_name
                .unwrap_or_else(|| existing.district_name.clone()),
            state_id: self.state_id.unwrap_or(existing.state_id),
            cases: self.cases.unwrap_or(existing.cases),
            cured: self.cured.unwrap_or(existing.cured),
            active: self.active.unwrap_or(existing.active),
            deaths: self.deaths.unwrap_or(existing.deaths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> District {
        District {
            district_id: 322,
            district_name: "Haveri".to_string(),
            state_id: 36,
            cases: 2323,
            cured: 2000,
            active: 315,
            deaths: 8,
        }
    }

    #[test]
    fn empty_patch_keeps_every_field() {
        assert_eq!(DistrictPatch::default().apply_to(&existing()), existing());
    }

    #[test]
    fn supplied_fields_overwrite_and_missing_fields_fall_back() {
        let patch: DistrictPatch =
            serde_json::from_str(r#"{"districtName": "Bagalkot", "cases": 2599}"#).unwrap();

        let updated = patch.apply_to(&existing());

        assert_eq!(updated.district_id, 322);
        assert_eq!(updated.district_name, "Bagalkot");
        assert_eq!(updated.cases, 2599);
        assert_eq!(updated.state_id, 36);
        assert_eq!(updated.cured, 2000);
        assert_eq!(updated.active, 315);
        assert_eq!(updated.deaths, 8);
    }

    #[test]
    fn zero_and_empty_string_are_preserved_as_supplied() {
        let patch: DistrictPatch =
            serde_json::from_str(r#"{"districtName": "", "deaths": 0, "active": 0}"#).unwrap();

        let updated = patch.apply_to(&existing());

        assert_eq!(updated.district_name, "");
        assert_eq!(updated.deaths, 0);
        assert_eq!(updated.active, 0);
        assert_eq!(updated.cases, 2323);
    }

    #[test]
    fn null_fields_keep_stored_values_instead_of_writing_null() {
        // Every district column is NOT NULL, so an explicit null cannot be
        // written through and falls back like a missing field.
        let patch: DistrictPatch =
            serde_json::from_str(r#"{"cases": null, "cured": 2100}"#).unwrap();

        let updated = patch.apply_to(&existing());

        assert_eq!(updated.cases, 2323);
        assert_eq!(updated.cured, 2100);
    }

    #[test]
    fn new_district_requires_every_field() {
        let result: Result<NewDistrict, _> =
            serde_json::from_str(r#"{"districtName": "Bagalkot", "stateId": 3}"#);
        assert!(result.is_err());

        let district: NewDistrict = serde_json::from_str(
            r#"{"districtName": "Bagalkot", "stateId": 3, "cases": 2323,
                "cured": 2000, "active": 315, "deaths": 8}"#,
        )
        .unwrap();
        assert_eq!(district.district_name, "Bagalkot");
        assert_eq!(district.deaths, 8);
    }
}
