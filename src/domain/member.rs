//! Member - Team Member Record

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::assets::Assets;
use crate::components::composite::data_table::TableRow;
use crate::error::{Error, Result};

/// Embedded sample dataset used by the table demos
const MEMBERS_ASSET: &str = "data/members.json";

/// A team member row shown in the catalog tables
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    /// Unique ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Team role
    pub role: String,
    /// Account status ("Active" or "Inactive")
    pub status: String,
    /// Last activity timestamp
    pub last_active: DateTime<Utc>,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }
}

impl TableRow for Member {
    fn row_id(&self) -> &str {
        &self.id
    }
}

/// Load the bundled member dataset from embedded assets
pub fn load_sample_members() -> Result<Vec<Member>> {
    let file = Assets::get(MEMBERS_ASSET).ok_or_else(|| Error::MissingAsset {
        path: MEMBERS_ASSET.to_string(),
    })?;
    let members: Vec<Member> = serde_json::from_slice(&file.data)?;
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_members_parse() {
        let members = load_sample_members().unwrap();
        assert!(!members.is_empty());
    }

    #[test]
    fn sample_member_ids_are_unique() {
        let members = load_sample_members().unwrap();
        let mut ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), members.len());
    }

    #[test]
    fn sample_members_include_both_statuses() {
        let members = load_sample_members().unwrap();
        assert!(members.iter().any(|m| m.is_active()));
        assert!(members.iter().any(|m| !m.is_active()));
    }

    #[test]
    fn row_id_comes_from_the_id_field() {
        let members = load_sample_members().unwrap();
        assert_eq!(members[0].row_id(), members[0].id);
    }
}
