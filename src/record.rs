use serde::{Deserialize, Serialize};

use crate::error::CrawlError;

/// One documented SQL function. Field names are serialized capitalized,
/// downstream consumers depend on `Name`, `Description`, `Theme` in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Theme")]
    pub theme: String,
}

impl FunctionRecord {
    pub fn new(theme: &str) -> Self {
        Self {
            theme: theme.to_string(),
            ..Default::default()
        }
    }
}

/// Encode the catalog as a single compact JSON array.
pub fn to_json(records: &[FunctionRecord]) -> Result<String, CrawlError> {
    Ok(serde_json::to_string(records)?)
}

// ── Tests ──
