//! Region (NOC) rows.

use serde::{Deserialize, Serialize};

use super::explicit_null;

/// Maximum NOC code length
pub const NOC_MAX_LEN: usize = 3;

/// A country/region keyed by its NOC code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub noc: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Region {
    pub fn new(noc: impl Into<String>, region: Option<&str>, notes: Option<&str>) -> Self {
        Self {
            noc: noc.into(),
            region: region.map(str::to_string),
            notes: notes.map(str::to_string),
        }
    }

    /// Check the NOC code constraint
    pub fn validate(&self) -> Result<(), String> {
        validate_noc(&self.noc)
    }
}

pub(crate) fn validate_noc(noc: &str) -> Result<(), String> {
    let len = noc.chars().count();
    if len == 0 || len > NOC_MAX_LEN {
        return Err(format!(
            "NOC '{}' must be between 1 and {} characters",
            noc, NOC_MAX_LEN
        ));
    }
    Ok(())
}

/// Partial update for a region
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegionUpdate {
    #[serde(default, deserialize_with = "explicit_null")]
    pub noc: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub region: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub notes: Option<Option<String>>,
}

impl RegionUpdate {
    /// Validate the payload without a target row.
    ///
    /// `noc: null` is rejected up front so a bad payload is reported even
    /// before the target is looked up.
    pub fn validate(&self) -> Result<(), String> {
        match &self.noc {
            Some(None) => Err("Field 'noc' cannot be null".to_string()),
            Some(Some(noc)) => validate_noc(noc),
            None => Ok(()),
        }
    }

    /// The new NOC code, if this update renames the region
    pub fn new_noc(&self) -> Option<&str> {
        self.noc.as_ref().and_then(|n| n.as_deref())
    }

    pub fn apply(self, region: &mut Region) -> Result<(), String> {
        self.validate()?;
        if let Some(Some(noc)) = self.noc {
            region.noc = noc;
        }
        if let Some(name) = self.region {
            region.region = name;
        }
        if let Some(notes) = self.notes {
            region.notes = notes;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_noc_length_constraint() {
        assert!(Region::new("NO2", None, None).validate().is_ok());
        assert!(Region::new("", None, None).validate().is_err());
        assert!(Region::new("NORW", None, None).validate().is_err());
    }

    #[test]
    fn test_region_requires_noc() {
        let parsed: Result<Region, _> = serde_json::from_value(json!({"noc": null}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_clears_notes() {
        let mut region = Region::new("NO2", Some("Test Region 2"), Some("Test Notes 2"));
        let update: RegionUpdate = serde_json::from_value(json!({
            "region": "Test Region 2 Updated",
            "notes": null
        }))
        .unwrap();

        update.apply(&mut region).unwrap();
        assert_eq!(region.noc, "NO2");
        assert_eq!(region.region.as_deref(), Some("Test Region 2 Updated"));
        assert_eq!(region.notes, None);
    }

    #[test]
    fn test_update_rejects_null_noc() {
        let update: RegionUpdate = serde_json::from_value(json!({"noc": null})).unwrap();
        assert!(update.validate().is_err());
    }
}
