//! The final report artifact and its serialization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::identity::IdentityEntry;

/// A score value in the final report: the raw integer, or the
/// human-readable string a converter produced for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Raw(i64),
    Text(String),
}

/// One ranked row of an objective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    pub index: usize,
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub score: ScoreValue,
}

/// An objective after rank assignment, as it appears in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedObjective {
    #[serde(rename = "DisplayName")]
    pub display_name: String,
    pub scores: Vec<RankedScore>,
}

/// The report written to the output file. Objective keys serialize in
/// sorted order so repeated runs over the same data are byte-stable.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timestamp: f64,
    pub scores: BTreeMap<String, RankedObjective>,
    #[serde(rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<IdentityEntry>>,
}

impl Report {
    /// Serializes the report and writes it in one step. Callers only reach
    /// this after a fully successful pipeline run, so a report file from an
    /// earlier run survives failed runs untouched.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
